//! Core engine types: constants, ingredient masks, agents, RNG.
//!
//! This module contains the fundamental building blocks the generators
//! and the engine are assembled from. Nothing here draws randomness on
//! its own or reads configuration.

pub mod agent;
pub mod constants;
pub mod mask;
pub mod rng;

pub use agent::{Agent, AgentId};
pub use mask::IngredientMask;
pub use rng::{GameRng, GameRngState};
