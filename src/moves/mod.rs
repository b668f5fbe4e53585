//! Moves: validated player intents and their application.
//!
//! - `MoveType`: the four move kinds (acquire, defeat, play, activate)
//! - `Move`: a validated `(type, card, targets)` triple with the `apply`
//!   state machine
//! - `MoveDescriptor`: raw move triples synthesized by effect handlers,
//!   applied immediately and never recorded

pub mod descriptor;
pub mod engine;

pub use descriptor::{MoveDescriptor, MoveType};
pub use engine::Move;
