//! Per-type lifecycle policies.
//!
//! Every component type declares one [`Policy`] record; the store resolves
//! it once at registration time and drives add/sweep/expiry behavior from
//! it. This replaces tag-type inheritance with an explicit static table.

use crate::types::Expiry;

/// Lifecycle flags for one component *type* (not per instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Lives for at most one tick; purged unconditionally by the
    /// pipeline's end-of-tick sweep.
    pub ephemeral: bool,
    /// Carries an [`Expiry`]; its timer is advanced once per tick and the
    /// owning stage's cleanup removes due instances.
    pub timed: bool,
    /// Whether one entity may hold several simultaneous instances.
    pub stacking: bool,
    /// At most one entity in the world may own this type.
    pub unique: bool,
    /// Exactly one entity must own this type for the world to be
    /// well-formed.
    pub required: bool,
}

impl Policy {
    const DEFAULT: Policy = Policy {
        ephemeral: false,
        timed: false,
        stacking: false,
        unique: false,
        required: false,
    };

    /// Ordinary persistent data: one instance per entity, swept only with
    /// its entity.
    pub const fn data() -> Self {
        Self::DEFAULT
    }

    /// Single-tick event. Events stack by default so several signals of
    /// one kind can land on an entity within a tick.
    pub const fn event() -> Self {
        Policy {
            ephemeral: true,
            stacking: true,
            ..Self::DEFAULT
        }
    }

    /// Timer-driven effect. Non-stacking unless opted in.
    pub const fn effect() -> Self {
        Policy {
            timed: true,
            ..Self::DEFAULT
        }
    }

    pub const fn stacking(self) -> Self {
        Policy {
            stacking: true,
            ..self
        }
    }

    pub const fn no_stack(self) -> Self {
        Policy {
            stacking: false,
            ..self
        }
    }

    pub const fn unique(self) -> Self {
        Policy {
            unique: true,
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Policy {
            required: true,
            ..self
        }
    }
}

/// A component governed by a lifecycle policy.
pub trait Component: Clone + Send + Sync + 'static {
    const POLICY: Policy;
}

/// A timed component exposing its expiry schedule to the store, which
/// advances the embedded timer once per tick.
pub trait Timed: Component {
    fn expiry(&self) -> &Expiry;
    fn expiry_mut(&mut self) -> &mut Expiry;
}
