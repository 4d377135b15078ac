//! Winning-condition generation.
//!
//! Each agent receives a fixed-size ingredient set such that every
//! ingredient appears in exactly the configured number of conditions
//! across all agents. Assignment is found by shuffling the full C(N, K)
//! candidate list and running a first-solution depth-first backtracking
//! search with per-ingredient capacity pruning. The shuffle is what
//! makes the final assignment seed-dependent, not just the tie-break
//! among valid solutions.
//!
//! The search is greedy: it takes the first complete assignment and
//! does no backjumping, so an exotic shape could in principle exhaust
//! even when feasible. For the shipped constants it completes quickly.

use tracing::debug;

use crate::core::constants::{
    INGREDIENTS_PER_PLAYER, NUMBER_OF_COPIES_PER_INGREDIENT, NUMBER_OF_INGREDIENTS,
    NUMBER_OF_PLAYERS,
};
use crate::core::{GameRng, IngredientMask};
use crate::error::GenerationError;

/// Shape of the assignment problem, bound to the crate constants by
/// [`generate_conditions`] and kept explicit so small shapes stay
/// testable.
#[derive(Clone, Copy, Debug)]
struct Shape {
    players: usize,
    ingredients: usize,
    per_player: usize,
    copies: usize,
}

/// Generate one winning condition per player.
///
/// Deterministic for a given `seed`; `None` yields process-randomized
/// conditions.
///
/// # Errors
///
/// [`GenerationError::SlotMismatch`] when the constants cannot balance,
/// [`GenerationError::SearchExhausted`] when the backtracking search
/// drains without a complete assignment. Both are fatal configuration
/// errors, not runtime conditions.
pub fn generate_conditions(seed: Option<u64>) -> Result<Vec<IngredientMask>, GenerationError> {
    debug!(
        seed,
        num_players = NUMBER_OF_PLAYERS,
        num_ingredients = NUMBER_OF_INGREDIENTS,
        "generating conditions"
    );

    let mut rng = GameRng::new(seed);
    let conditions = solve(
        &mut rng,
        Shape {
            players: NUMBER_OF_PLAYERS,
            ingredients: NUMBER_OF_INGREDIENTS,
            per_player: INGREDIENTS_PER_PLAYER,
            copies: NUMBER_OF_COPIES_PER_INGREDIENT,
        },
    )?;

    debug!(count = conditions.len(), "conditions generated");

    Ok(conditions)
}

fn solve(rng: &mut GameRng, shape: Shape) -> Result<Vec<IngredientMask>, GenerationError> {
    let ingredient_slots = shape.ingredients * shape.copies;
    let player_slots = shape.players * shape.per_player;

    if ingredient_slots != player_slots {
        return Err(GenerationError::SlotMismatch {
            ingredient_slots,
            player_slots,
        });
    }

    let mut candidates = enumerate_masks(shape.ingredients, shape.per_player);
    rng.shuffle(&mut candidates);

    let mut remaining = vec![shape.copies; shape.ingredients];
    let mut solution = Vec::with_capacity(shape.players);

    if assign(shape.players, &candidates, &mut remaining, &mut solution) {
        Ok(solution)
    } else {
        Err(GenerationError::SearchExhausted)
    }
}

/// All ways to choose `per_player` ingredients out of `ingredients`,
/// as masks, in lexicographic order.
fn enumerate_masks(ingredients: usize, per_player: usize) -> Vec<IngredientMask> {
    fn recurse(
        next: u8,
        ingredients: u8,
        remaining: usize,
        current: IngredientMask,
        out: &mut Vec<IngredientMask>,
    ) {
        if remaining == 0 {
            out.push(current);
            return;
        }
        if usize::from(ingredients - next) < remaining {
            return;
        }
        for bit in next..ingredients {
            recurse(
                bit + 1,
                ingredients,
                remaining - 1,
                current | IngredientMask::from_bit(bit),
                out,
            );
        }
    }

    let mut out = Vec::new();
    recurse(
        0,
        ingredients as u8,
        per_player,
        IngredientMask::EMPTY,
        &mut out,
    );
    out
}

/// Depth-first search over players: first complete assignment wins.
fn assign(
    players: usize,
    candidates: &[IngredientMask],
    remaining: &mut [usize],
    solution: &mut Vec<IngredientMask>,
) -> bool {
    if solution.len() == players {
        return true;
    }

    for &mask in candidates {
        if solution.contains(&mask) {
            continue;
        }

        if !is_feasible(mask, remaining) {
            continue;
        }

        take_capacity(mask, remaining);
        solution.push(mask);

        if assign(players, candidates, remaining, solution) {
            return true;
        }

        solution.pop();
        release_capacity(mask, remaining);
    }

    false
}

/// True when every ingredient in `mask` still has capacity left.
fn is_feasible(mask: IngredientMask, remaining: &[usize]) -> bool {
    mask.iter_bits().all(|bit| remaining[bit as usize] > 0)
}

fn take_capacity(mask: IngredientMask, remaining: &mut [usize]) {
    for bit in mask.iter_bits() {
        remaining[bit as usize] -= 1;
    }
}

fn release_capacity(mask: IngredientMask, remaining: &mut [usize]) {
    for bit in mask.iter_bits() {
        remaining[bit as usize] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_masks_count() {
        // C(10, 5) = 252, C(4, 2) = 6
        assert_eq!(enumerate_masks(10, 5).len(), 252);
        assert_eq!(enumerate_masks(4, 2).len(), 6);
    }

    #[test]
    fn test_enumerate_masks_bit_counts() {
        for mask in enumerate_masks(10, 5) {
            assert_eq!(mask.count(), 5);
        }
    }

    #[test]
    fn test_conditions_have_fixed_size() {
        let conditions = generate_conditions(Some(42)).unwrap();

        assert_eq!(conditions.len(), NUMBER_OF_PLAYERS);
        for condition in &conditions {
            assert_eq!(condition.count(), INGREDIENTS_PER_PLAYER as u32);
        }
    }

    #[test]
    fn test_every_ingredient_used_exactly_copies_times() {
        for seed in [0, 1, 42, 1234] {
            let conditions = generate_conditions(Some(seed)).unwrap();

            for bit in 0..NUMBER_OF_INGREDIENTS as u8 {
                let uses = conditions
                    .iter()
                    .filter(|c| c.contains(IngredientMask::from_bit(bit)))
                    .count();
                assert_eq!(
                    uses, NUMBER_OF_COPIES_PER_INGREDIENT,
                    "ingredient {bit}, seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_conditions_are_deterministic() {
        let a = generate_conditions(Some(42)).unwrap();
        let b = generate_conditions(Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_conditions(Some(1)).unwrap();
        let b = generate_conditions(Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_slot_mismatch_is_rejected() {
        // 3 players x 2 each = 6 slots, but 4 ingredients x 1 copy = 4.
        let mut rng = GameRng::new(Some(0));
        let result = solve(
            &mut rng,
            Shape {
                players: 3,
                ingredients: 4,
                per_player: 2,
                copies: 1,
            },
        );

        assert!(matches!(
            result,
            Err(GenerationError::SlotMismatch {
                ingredient_slots: 4,
                player_slots: 6,
            })
        ));
    }

    #[test]
    fn test_small_feasible_shape_solves() {
        // 2 players x 2 each over 4 ingredients, 1 copy each: the two
        // conditions must partition the ingredient set.
        let mut rng = GameRng::new(Some(7));
        let solution = solve(
            &mut rng,
            Shape {
                players: 2,
                ingredients: 4,
                per_player: 2,
                copies: 1,
            },
        )
        .unwrap();

        assert_eq!(solution.len(), 2);
        assert!((solution[0] & solution[1]).is_empty());
        assert_eq!((solution[0] | solution[1]).count(), 4);
    }

    #[test]
    fn test_exhausted_search_is_reported() {
        // Balanced slots (2x2 = 4x1) but distinct 2-bit masks over 2
        // ingredients don't exist twice, so the search must drain.
        let mut rng = GameRng::new(Some(0));
        let result = solve(
            &mut rng,
            Shape {
                players: 2,
                ingredients: 2,
                per_player: 2,
                copies: 2,
            },
        );

        assert!(matches!(result, Err(GenerationError::SearchExhausted)));
    }
}
