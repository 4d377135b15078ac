//! Board generation.
//!
//! The board is a fixed-length cyclic sequence of tiles, assembled from
//! the configured counts and shuffled once with a seeded uniform
//! permutation. It is never rebuilt during a game.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core::constants::{
    CHOOSE_ANY_INGREDIENT_TILES, LOSE_ALL_INGREDIENTS_TILES, NUMBER_OF_INGREDIENTS,
    QUEUED_RANDOM_ACTION_TILES, TILES_PER_INGREDIENT, TOTAL_BOARD_SIZE,
};
use crate::core::GameRng;

/// One position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Offers the single ingredient with this index.
    Ingredient(u8),
    /// Choose any 2 still-needed ingredients.
    ChooseAny,
    /// Draw the next card from the action queue.
    DrawAction,
    /// Lose every held ingredient.
    LoseAll,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Ingredient(index) => write!(f, "ingredient{index}"),
            Tile::ChooseAny => write!(f, "chef"),
            Tile::DrawAction => write!(f, "card"),
            Tile::LoseAll => write!(f, "loseall"),
        }
    }
}

/// Generate a shuffled board.
///
/// Deterministic for a given `seed`; `None` yields a process-randomized
/// board.
///
/// # Panics
///
/// Panics if the assembled tile counts do not add up to
/// [`TOTAL_BOARD_SIZE`], a configuration-consistency failure in the
/// constants, not a runtime condition.
#[must_use]
pub fn generate_board(seed: Option<u64>) -> Vec<Tile> {
    debug!(seed, total_size = TOTAL_BOARD_SIZE, "generating board");

    let mut rng = GameRng::new(seed);
    let mut board = Vec::with_capacity(TOTAL_BOARD_SIZE);

    for index in 0..NUMBER_OF_INGREDIENTS as u8 {
        board.extend(std::iter::repeat(Tile::Ingredient(index)).take(TILES_PER_INGREDIENT));
    }

    board.extend(std::iter::repeat(Tile::ChooseAny).take(CHOOSE_ANY_INGREDIENT_TILES));
    board.extend(std::iter::repeat(Tile::DrawAction).take(QUEUED_RANDOM_ACTION_TILES));
    board.extend(std::iter::repeat(Tile::LoseAll).take(LOSE_ALL_INGREDIENTS_TILES));

    assert_eq!(
        board.len(),
        TOTAL_BOARD_SIZE,
        "assembled board does not match the configured size"
    );

    rng.shuffle(&mut board);

    debug!(
        board_size = board.len(),
        ingredient_tiles = NUMBER_OF_INGREDIENTS * TILES_PER_INGREDIENT,
        special_tiles =
            CHOOSE_ANY_INGREDIENT_TILES + QUEUED_RANDOM_ACTION_TILES + LOSE_ALL_INGREDIENTS_TILES,
        "board generated"
    );

    board
}
