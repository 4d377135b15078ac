//! # potluck
//!
//! A deterministic multi-agent board game engine for ingredient-collection
//! races.
//!
//! ## Design Principles
//!
//! 1. **Seed In, Game Out**: One master seed reproduces the board, the
//!    action queue, every winning condition, and the entire turn
//!    sequence bit-for-bit. No seed means a process-randomized game.
//!
//! 2. **Owned Randomness**: Each engine instance owns a single RNG
//!    stream. There is no global random state; parallel simulations
//!    just own independent engines.
//!
//! 3. **Dumb Agents, Smart Engine**: Agents are pure bitmask containers
//!    with total, never-failing mutators. All rule enforcement and all
//!    decision-making (uniform-random auto-resolution) lives in the
//!    engine.
//!
//! ## Architecture
//!
//! - **Construction**: the master seed derives three sub-seeds by fixed
//!   offset; board, action queue, and winning conditions are generated
//!   once, then agents start empty.
//!
//! - **Turn loop**: callers repeatedly call [`GameEngine::step`]; each
//!   step rolls the dice, advances the shared board cursor, resolves
//!   the landed tile (possibly consuming an action card), and checks
//!   the win condition. The caller imposes any turn cap.
//!
//! ## Modules
//!
//! - `core`: constants, ingredient masks, agents, RNG
//! - `generate`: seeded board / action-queue / condition generation
//! - `engine`: the turn-resolution state machine
//! - `error`: construction-time error types
//! - `settings`: environment-driven process settings
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod engine;
pub mod error;
pub mod generate;
pub mod logging;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{Agent, AgentId, GameRng, GameRngState, IngredientMask};

pub use crate::engine::GameEngine;

pub use crate::error::GenerationError;

pub use crate::generate::{
    generate_action_queue, generate_board, generate_conditions, ActionCard, Tile,
};

pub use crate::logging::{LogFormat, LogLevel};

pub use crate::settings::{GameSettings, LogSettings, Settings, SettingsError};
