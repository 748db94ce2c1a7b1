//! Pure turn-simulation core
//!
//! Everything in here is synchronous and deterministic: given the same
//! snapshot, the same local actor and the same pending selection, every
//! function returns the same answer. The contract owns all randomness and
//! all rule enforcement; this layer only mirrors enough of the turn model
//! to predict and present.

pub mod action;
pub mod model;
pub mod predict;
pub mod range;
pub mod threat;

pub use action::{Deploy, Horizontal, TurnAction, Vertical};
