//! Input: logical controls sampled once per frame and mapped to actions.
//!
//! # Invariants
//! - The scene consumes [`Action`]s, never platform key codes.
//! - An [`InputState`] is a snapshot; it does not change during a frame.

pub mod action;
mod control;

pub use action::Action;
pub use control::{Control, InputState, ParseControlError};
