//! Agents: per-player ingredient state and winning condition.
//!
//! An agent is a pure bitmask container. It enforces no game rules;
//! the engine is responsible for only ever passing legal masks to the
//! mutators. That split keeps every mutator total: no RNG, no failure
//! modes, no validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::mask::IngredientMask;

/// Agent identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// A player in the game.
///
/// The agent's goal is to make `state` equal `condition` by collecting
/// ingredients. Both are ingredient bitmasks; `condition` is fixed at
/// creation, `state` is mutated every turn by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    condition: IngredientMask,
    state: IngredientMask,
}

impl Agent {
    /// Create an agent with a fixed winning condition and starting state.
    #[must_use]
    pub fn new(id: AgentId, condition: IngredientMask, state: IngredientMask) -> Self {
        debug!(
            agent = %id,
            condition = %condition,
            state = %state,
            "agent initialized"
        );
        Self {
            id,
            condition,
            state,
        }
    }

    /// This agent's ID.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// The fixed winning condition.
    #[must_use]
    pub const fn condition(&self) -> IngredientMask {
        self.condition
    }

    /// Currently held ingredients.
    #[must_use]
    pub const fn state(&self) -> IngredientMask {
        self.state
    }

    /// Ingredients where condition and state disagree.
    ///
    /// Computed as `condition ^ state`. Under the game rules `state`
    /// only ever holds condition bits, so this equals "still missing",
    /// but the XOR form is the contract other components are built
    /// against.
    #[must_use]
    pub fn needed_mask(&self) -> IngredientMask {
        self.condition ^ self.state
    }

    /// Number of ingredients still needed to win.
    #[must_use]
    pub fn needed_count(&self) -> u32 {
        self.needed_mask().count()
    }

    /// True once the held ingredients match the condition bit-for-bit.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.condition == self.state
    }

    /// Add ingredients to the agent's state.
    ///
    /// Bits already held are unaffected. The caller is responsible for
    /// passing only legal masks.
    pub fn choose(&mut self, mask: IngredientMask) {
        let old_state = self.state;
        self.state |= mask;

        if !mask.is_empty() {
            info!(
                agent = %self.id,
                gained = %mask,
                state = %self.state,
                still_needed = self.needed_count(),
                "agent gained ingredients"
            );
        }

        debug!(
            agent = %self.id,
            mask = %mask,
            old_state = %old_state,
            new_state = %self.state,
            "agent chose ingredients"
        );
    }

    /// Remove ingredients from the agent's state.
    pub fn lose(&mut self, mask: IngredientMask) {
        let old_state = self.state;
        self.state = self.state.difference(mask);

        if !mask.is_empty() {
            info!(
                agent = %self.id,
                lost = %mask,
                state = %self.state,
                still_needed = self.needed_count(),
                "agent lost ingredients"
            );
        }

        debug!(
            agent = %self.id,
            mask = %mask,
            old_state = %old_state,
            new_state = %self.state,
            "agent dropped ingredients"
        );
    }

    /// Steal ingredients from another agent.
    ///
    /// Only ingredients the target actually holds and that match `mask`
    /// are moved. Stealing nothing is a harmless no-op, not an error.
    pub fn steal_from(&mut self, target: &mut Agent, mask: IngredientMask) {
        let stolen = target.state & mask;
        let old_target_state = target.state;
        let old_self_state = self.state;
        target.state = target.state.difference(stolen);
        self.state |= stolen;

        if !stolen.is_empty() {
            info!(
                thief = %self.id,
                target = %target.id,
                stolen = %stolen,
                thief_state = %self.state,
                target_state = %target.state,
                "agent stole ingredients"
            );
        }

        debug!(
            thief = %self.id,
            target = %target.id,
            mask = %mask,
            stolen = %stolen,
            thief_old_state = %old_self_state,
            thief_new_state = %self.state,
            target_old_state = %old_target_state,
            target_new_state = %target.state,
            "agent stole from another agent"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(bits: u16) -> IngredientMask {
        IngredientMask::from_bits_truncated(bits)
    }

    #[test]
    fn test_agent_id_basics() {
        let id = AgentId::new(3);
        assert_eq!(id.index(), 3);
        assert_eq!(format!("{id}"), "Agent 3");
    }

    #[test]
    fn test_needed_mask_is_xor() {
        let agent = Agent::new(AgentId::new(0), mask(0b0111), mask(0b0101));
        assert_eq!(agent.needed_mask(), mask(0b0010));
        assert_eq!(agent.needed_count(), 1);
    }

    #[test]
    fn test_needed_mask_flags_extra_bits() {
        // A held bit outside the condition counts as "disagreeing" under
        // the XOR formula. No rule grants such a bit, but the formula is
        // part of the contract.
        let agent = Agent::new(AgentId::new(0), mask(0b0011), mask(0b0111));
        assert_eq!(agent.needed_mask(), mask(0b0100));
    }

    #[test]
    fn test_has_won_exact_match_only() {
        let condition = mask(0b0110);

        let mut agent = Agent::new(AgentId::new(0), condition, IngredientMask::EMPTY);
        assert!(!agent.has_won());

        // One bit short: not a win.
        agent.choose(mask(0b0010));
        assert!(!agent.has_won());

        agent.choose(mask(0b0100));
        assert!(agent.has_won());
    }

    #[test]
    fn test_has_won_false_with_extra_bit() {
        let agent = Agent::new(AgentId::new(0), mask(0b0011), mask(0b0111));
        assert!(!agent.has_won());
    }

    #[test]
    fn test_choose_is_bitwise_or() {
        let mut agent = Agent::new(AgentId::new(0), mask(0b1111), mask(0b0001));

        agent.choose(mask(0b0011));
        assert_eq!(agent.state(), mask(0b0011));

        // Re-choosing held bits changes nothing.
        agent.choose(mask(0b0001));
        assert_eq!(agent.state(), mask(0b0011));
    }

    #[test]
    fn test_lose_clears_masked_bits() {
        let mut agent = Agent::new(AgentId::new(0), mask(0b1111), mask(0b0111));

        agent.lose(mask(0b0101));
        assert_eq!(agent.state(), mask(0b0010));

        // Losing bits not held is harmless.
        agent.lose(mask(0b1101));
        assert_eq!(agent.state(), mask(0b0010));
    }

    #[test]
    fn test_steal_moves_only_held_bits() {
        let mut thief = Agent::new(AgentId::new(0), mask(0b1111), IngredientMask::EMPTY);
        let mut target = Agent::new(AgentId::new(1), mask(0b1111), mask(0b0101));

        thief.steal_from(&mut target, mask(0b0011));

        assert_eq!(thief.state(), mask(0b0001));
        assert_eq!(target.state(), mask(0b0100));
    }

    #[test]
    fn test_steal_nothing_is_noop() {
        let mut thief = Agent::new(AgentId::new(0), mask(0b1111), mask(0b1000));
        let mut target = Agent::new(AgentId::new(1), mask(0b1111), mask(0b0100));

        thief.steal_from(&mut target, mask(0b0011));

        assert_eq!(thief.state(), mask(0b1000));
        assert_eq!(target.state(), mask(0b0100));
    }

    #[test]
    fn test_steal_conserves_bits() {
        let mut thief = Agent::new(AgentId::new(0), mask(0b1111), mask(0b1001));
        let mut target = Agent::new(AgentId::new(1), mask(0b1111), mask(0b0110));
        let steal_mask = mask(0b0111);

        let before =
            (thief.state() & steal_mask).count() + (target.state() & steal_mask).count();

        thief.steal_from(&mut target, steal_mask);

        let after =
            (thief.state() & steal_mask).count() + (target.state() & steal_mask).count();

        assert_eq!(before, after);
    }

    #[test]
    fn test_serde_round_trip() {
        let agent = Agent::new(AgentId::new(2), mask(0b0110), mask(0b0010));
        let json = serde_json::to_string(&agent).unwrap();
        let back: Agent = serde_json::from_str(&json).unwrap();
        assert_eq!(agent, back);
    }
}
