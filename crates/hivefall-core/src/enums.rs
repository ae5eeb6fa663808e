//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The opposite horizontal direction; vertical directions flip too.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Shoot,
    Quit,
}

/// Abstract input symbol produced by the outer driver's input polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSymbol {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    Menu,
    Quit,
}

/// World-level control signal consumed by the stage director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSignal {
    NextStage,
    GameOver,
    Quit,
}

/// UI refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiSignal {
    RefreshScore,
    RefreshLives,
}
