//! Game driver binary.
//!
//! # Startup Sequence
//!
//! 1. Load settings from the environment
//! 2. Initialize structured logging (tracing)
//! 3. Construct the engine from the configured seed
//! 4. Step until a winner emerges or the turn cap is hit
//! 5. Log the result
//!
//! A capped-out game is reported as inconclusive, not as an error; the
//! only failures that propagate out of `main` are settings parse
//! errors and construction-time generation errors.

use tracing::{info, warn};

use potluck::{GameEngine, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    // Must run before any engine logging happens.
    potluck::logging::init(&settings.log);

    info!(
        seed = settings.game.seed,
        max_turns = settings.game.max_turns,
        "starting game"
    );

    let mut engine = GameEngine::new(settings.game.seed)?;

    for _ in 0..settings.game.max_turns {
        if let Some(winner) = engine.step() {
            let agent = &engine.agents()[winner.index()];

            info!(
                winner = %winner,
                turn = engine.turn_count(),
                condition = %agent.condition(),
                "game won"
            );

            return Ok(());
        }
    }

    warn!(
        max_turns = settings.game.max_turns,
        "turn cap reached with no winner; game is inconclusive"
    );

    Ok(())
}
