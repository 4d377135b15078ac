//! Fixed game parameters and the totals derived from them.
//!
//! Everything here is a compile-time constant: the generators and the
//! engine reference these directly rather than carrying per-instance
//! configuration. The derived totals are what the generators assert
//! their output against, so an inconsistent edit to this file fails at
//! the first construction rather than mid-game.

// =============================================================================
// Movement
// =============================================================================

/// Number of dice summed for each movement roll.
pub const MOVEMENT_DICE_COUNT: usize = 1;

/// Number of sides per movement die.
pub const MOVEMENT_DICE_SIDES: u32 = 6;

// =============================================================================
// Players and ingredients
// =============================================================================

/// Number of agents in a game.
pub const NUMBER_OF_PLAYERS: usize = 6;

/// Number of distinct ingredient types. One bit per ingredient, so this
/// must fit in the mask's backing integer.
pub const NUMBER_OF_INGREDIENTS: usize = 10;

/// Ingredients in each agent's winning condition.
pub const INGREDIENTS_PER_PLAYER: usize = 5;

/// How many condition slots each ingredient occupies across all agents.
pub const NUMBER_OF_COPIES_PER_INGREDIENT: usize =
    NUMBER_OF_PLAYERS * INGREDIENTS_PER_PLAYER / NUMBER_OF_INGREDIENTS;

// =============================================================================
// Board tiles
// =============================================================================

/// Board tiles per ingredient type.
pub const TILES_PER_INGREDIENT: usize = 2;

/// "Choose any 2 needed ingredients" tiles.
pub const CHOOSE_ANY_INGREDIENT_TILES: usize = 2;

/// "Draw the next queued action" tiles.
pub const QUEUED_RANDOM_ACTION_TILES: usize = 12;

/// "Lose everything" tiles.
pub const LOSE_ALL_INGREDIENTS_TILES: usize = 1;

// =============================================================================
// Action queue composition
// =============================================================================

/// `lose1` cards per queue.
pub const ACTION_QUEUE_LOSE_ONE_AMOUNT: usize = 8;

/// `lose2` cards per queue.
pub const ACTION_QUEUE_LOSE_TWO_AMOUNT: usize = 2;

/// `loseall` cards per queue.
pub const ACTION_QUEUE_LOSE_ALL_AMOUNT: usize = 1;

/// `choose1` cards per queue.
pub const ACTION_QUEUE_CHOOSE_ONE_AMOUNT: usize = 7;

/// `choose2` cards per queue.
pub const ACTION_QUEUE_CHOOSE_TWO_AMOUNT: usize = 2;

/// `steal1` cards per queue.
pub const ACTION_QUEUE_STEAL_ONE_AMOUNT: usize = 3;

/// `steal2` cards per queue.
pub const ACTION_QUEUE_STEAL_TWO_AMOUNT: usize = 1;

// =============================================================================
// Derived totals
// =============================================================================

/// Cards in a freshly generated action queue.
pub const TOTAL_ACTION_QUEUE_SIZE: usize = ACTION_QUEUE_LOSE_ONE_AMOUNT
    + ACTION_QUEUE_LOSE_TWO_AMOUNT
    + ACTION_QUEUE_LOSE_ALL_AMOUNT
    + ACTION_QUEUE_CHOOSE_ONE_AMOUNT
    + ACTION_QUEUE_CHOOSE_TWO_AMOUNT
    + ACTION_QUEUE_STEAL_ONE_AMOUNT
    + ACTION_QUEUE_STEAL_TWO_AMOUNT;

/// Tiles on the board.
pub const TOTAL_BOARD_SIZE: usize = NUMBER_OF_INGREDIENTS * TILES_PER_INGREDIENT
    + CHOOSE_ANY_INGREDIENT_TILES
    + QUEUED_RANDOM_ACTION_TILES
    + LOSE_ALL_INGREDIENTS_TILES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_totals() {
        assert_eq!(TOTAL_BOARD_SIZE, 35);
        assert_eq!(TOTAL_ACTION_QUEUE_SIZE, 24);
        assert_eq!(NUMBER_OF_COPIES_PER_INGREDIENT, 3);
    }

    #[test]
    fn test_condition_slots_balance() {
        // Every condition slot an agent needs must be backed by an
        // ingredient copy, or condition generation cannot succeed.
        assert_eq!(
            NUMBER_OF_INGREDIENTS * NUMBER_OF_COPIES_PER_INGREDIENT,
            NUMBER_OF_PLAYERS * INGREDIENTS_PER_PLAYER
        );
    }

    #[test]
    fn test_masks_fit_backing_integer() {
        assert!(NUMBER_OF_INGREDIENTS <= 16);
    }
}
