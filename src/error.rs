//! Construction-time error types.
//!
//! Generation failures are the only error surface in the crate: they
//! indicate a mutually inconsistent constant set and abort engine
//! construction. Every per-turn operation on a validly constructed
//! engine is total.

/// Errors raised while generating winning conditions.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Total ingredient copies and total condition slots disagree, so
    /// no assignment can exist.
    #[error(
        "infeasible configuration: {ingredient_slots} ingredient slots \
         but {player_slots} player condition slots"
    )]
    SlotMismatch {
        /// Ingredients times copies per ingredient.
        ingredient_slots: usize,
        /// Players times ingredients per player.
        player_slots: usize,
    },

    /// The backtracking search tried every candidate order without
    /// completing an assignment.
    #[error("no feasible condition assignment found for the shuffled candidate order")]
    SearchExhausted,
}
