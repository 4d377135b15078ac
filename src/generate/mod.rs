//! Seeded generation of the board, the action queue, and the winning
//! conditions.
//!
//! Each generator is deterministic given a seed and process-randomized
//! without one. Board and queue are straight assemble-then-shuffle;
//! condition generation solves a constrained assignment by randomized
//! backtracking.

pub mod board;
pub mod condition;
pub mod queue;

pub use board::{generate_board, Tile};
pub use condition::generate_conditions;
pub use queue::{generate_action_queue, ActionCard};
