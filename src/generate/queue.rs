//! Action-queue generation.
//!
//! The queue is a FIFO of action cards consumed when agents land on a
//! draw tile. When it runs dry mid-game the engine regenerates it with
//! a freshly drawn seed: an infinite deck, never an error.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

use crate::core::constants::{
    ACTION_QUEUE_CHOOSE_ONE_AMOUNT, ACTION_QUEUE_CHOOSE_TWO_AMOUNT, ACTION_QUEUE_LOSE_ALL_AMOUNT,
    ACTION_QUEUE_LOSE_ONE_AMOUNT, ACTION_QUEUE_LOSE_TWO_AMOUNT, ACTION_QUEUE_STEAL_ONE_AMOUNT,
    ACTION_QUEUE_STEAL_TWO_AMOUNT, TOTAL_ACTION_QUEUE_SIZE,
};
use crate::core::GameRng;

/// One drawable action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCard {
    /// Choose up to this many still-needed ingredients.
    Choose(u8),
    /// Lose up to this many held-and-needed ingredients.
    Lose(u8),
    /// Lose every held ingredient, needed or not.
    LoseAll,
    /// Steal up to this many needed ingredients from the other agents.
    Steal(u8),
}

impl fmt::Display for ActionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCard::Choose(amount) => write!(f, "choose{amount}"),
            ActionCard::Lose(amount) => write!(f, "lose{amount}"),
            ActionCard::LoseAll => write!(f, "loseall"),
            ActionCard::Steal(amount) => write!(f, "steal{amount}"),
        }
    }
}

/// Generate a shuffled action queue.
///
/// Same determinism contract as board generation.
///
/// # Panics
///
/// Panics if the assembled card counts do not add up to
/// [`TOTAL_ACTION_QUEUE_SIZE`], a configuration-consistency failure in
/// the constants.
#[must_use]
pub fn generate_action_queue(seed: Option<u64>) -> VecDeque<ActionCard> {
    debug!(seed, total_size = TOTAL_ACTION_QUEUE_SIZE, "generating action queue");

    let mut rng = GameRng::new(seed);
    let mut cards = Vec::with_capacity(TOTAL_ACTION_QUEUE_SIZE);

    cards.extend(std::iter::repeat(ActionCard::Lose(1)).take(ACTION_QUEUE_LOSE_ONE_AMOUNT));
    cards.extend(std::iter::repeat(ActionCard::Lose(2)).take(ACTION_QUEUE_LOSE_TWO_AMOUNT));
    cards.extend(std::iter::repeat(ActionCard::LoseAll).take(ACTION_QUEUE_LOSE_ALL_AMOUNT));

    cards.extend(std::iter::repeat(ActionCard::Choose(1)).take(ACTION_QUEUE_CHOOSE_ONE_AMOUNT));
    cards.extend(std::iter::repeat(ActionCard::Choose(2)).take(ACTION_QUEUE_CHOOSE_TWO_AMOUNT));

    cards.extend(std::iter::repeat(ActionCard::Steal(1)).take(ACTION_QUEUE_STEAL_ONE_AMOUNT));
    cards.extend(std::iter::repeat(ActionCard::Steal(2)).take(ACTION_QUEUE_STEAL_TWO_AMOUNT));

    assert_eq!(
        cards.len(),
        TOTAL_ACTION_QUEUE_SIZE,
        "assembled action queue does not match the configured size"
    );

    rng.shuffle(&mut cards);

    debug!(
        queue_size = cards.len(),
        lose_actions = ACTION_QUEUE_LOSE_ONE_AMOUNT
            + ACTION_QUEUE_LOSE_TWO_AMOUNT
            + ACTION_QUEUE_LOSE_ALL_AMOUNT,
        choose_actions = ACTION_QUEUE_CHOOSE_ONE_AMOUNT + ACTION_QUEUE_CHOOSE_TWO_AMOUNT,
        steal_actions = ACTION_QUEUE_STEAL_ONE_AMOUNT + ACTION_QUEUE_STEAL_TWO_AMOUNT,
        "action queue generated"
    );

    cards.into()
}
