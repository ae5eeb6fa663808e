//! Lifecycle-aware component store for hivefall.
//!
//! A thin layer over `hecs::World` that enforces each component type's
//! [`Policy`](hivefall_core::policy::Policy): stacking rules on add, a
//! world-wide unique-owner index, read-time transform hooks, per-tick
//! timer advancement for timed effects, and the bulk sweep that purges
//! ephemeral event types at the end of every tick.

mod store;

pub use store::{cleanup_effect, Store};
