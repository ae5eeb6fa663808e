#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::components::{AttackEffect, GameState, Swarm};
    use crate::content;
    use crate::enums::{Direction, InputSymbol};
    use crate::policy::Component;
    use crate::types::{Bounds, Expiry, Rgba, Timer};

    #[test]
    fn test_bounds_corners() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.corners(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_bounds_overlap_is_closed_interval() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        // Touching edges count as overlap.
        let touching = Bounds::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.overlaps(&touching));
        // A box spanning the other entirely still overlaps.
        let spanning = Bounds::new(-5.0, -5.0, 30.0, 30.0);
        assert!(a.overlaps(&spanning));
        assert!(spanning.overlaps(&a));
        let clear = Bounds::new(11.0, 0.0, 5.0, 5.0);
        assert!(!a.overlaps(&clear));
    }

    #[test]
    fn test_bounds_escape_classification() {
        let field = Bounds::new(0.0, 0.0, 640.0, 480.0);
        let inside = Bounds::new(100.0, 100.0, 10.0, 10.0);
        assert!(!inside.escapes(&field));

        let poking = Bounds::new(-1.0, 100.0, 10.0, 10.0);
        assert!(poking.escapes(&field));
        assert!(!poking.fully_outside(&field));

        let gone = Bounds::new(-50.0, 100.0, 10.0, 10.0);
        assert!(gone.escapes(&field));
        assert!(gone.fully_outside(&field));
    }

    #[test]
    fn test_timer_elapse_and_restart() {
        let mut timer = Timer::new(1.0);
        assert!(!timer.has_elapsed());
        timer.advance(0.5);
        assert!(!timer.has_elapsed());
        timer.advance(0.5);
        assert!(timer.has_elapsed());

        timer.restart(2.0);
        assert!(!timer.has_elapsed());
        assert_eq!(timer.duration, 2.0);
        assert_eq!(timer.elapsed, 0.0);
    }

    #[test]
    fn test_expiry_due_paths() {
        let mut never = Expiry::never();
        assert!(!never.is_due());
        never.flag();
        assert!(never.is_due());

        let mut timed = Expiry::after(0.25);
        assert!(!timed.is_due());
        timed.timer.as_mut().unwrap().advance(0.25);
        assert!(timed.is_due());

        assert!(Expiry::from_timeout(None).timer.is_none());
    }

    #[test]
    fn test_policy_table() {
        use crate::events::{DamageEvent, PositionUpdate};

        assert!(DamageEvent::POLICY.ephemeral);
        assert!(DamageEvent::POLICY.stacking);
        assert!(!PositionUpdate::POLICY.stacking);

        assert!(AttackEffect::POLICY.timed);
        assert!(AttackEffect::POLICY.stacking);

        assert!(GameState::POLICY.unique);
        assert!(GameState::POLICY.required);
        assert!(Swarm::POLICY.unique);
        assert!(!Swarm::POLICY.required);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_stage_lookup_falls_back_to_game_over() {
        assert_eq!(content::stage(1), content::stage(1));
        assert_ne!(content::stage(1), content::GAME_OVER);
        assert_eq!(content::stage(9), content::GAME_OVER);
        assert_eq!(content::stage(0), content::GAME_OVER);
    }

    #[test]
    fn test_stage_rows_contain_swarm_and_hive() {
        for n in 1..=8 {
            let layout = content::stage(n);
            let joined: String = layout.concat();
            assert!(joined.contains('H'), "stage {n} is missing the hive");
            assert!(joined.contains('S'), "stage {n} is missing swarm rows");
        }
    }

    #[test]
    fn test_input_symbol_serde_round_trip() {
        let symbols = [
            InputSymbol::Up,
            InputSymbol::Down,
            InputSymbol::Left,
            InputSymbol::Right,
            InputSymbol::Shoot,
            InputSymbol::Menu,
            InputSymbol::Quit,
        ];
        for s in symbols {
            let json = serde_json::to_string(&s).unwrap();
            let back: InputSymbol = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    #[test]
    fn test_drawable_serializes_with_text() {
        let drawable = crate::types::Drawable {
            x: 1.0,
            y: 2.0,
            w: 3.0,
            h: 4.0,
            color: Rgba::WHITE,
            text: Some("SCORE: 0".into()),
        };
        let json = serde_json::to_string(&drawable).unwrap();
        assert!(json.contains("SCORE"));
    }

    #[test]
    fn test_bounds_translated() {
        let b = Bounds::new(5.0, 5.0, 2.0, 2.0).translated(Vec2::new(-5.0, 10.0));
        assert_eq!(b.position, Vec2::new(0.0, 15.0));
        assert_eq!(b.size, Vec2::new(2.0, 2.0));
    }
}
