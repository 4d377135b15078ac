//! Property tests for the agent bitmask laws.
//!
//! The mutators are total functions over arbitrary masks, so these
//! laws are checked over the full mask space, not just masks that are
//! legal under the game rules.

use proptest::prelude::*;

use potluck::core::constants::NUMBER_OF_INGREDIENTS;
use potluck::{Agent, AgentId, IngredientMask};

fn arb_mask() -> impl Strategy<Value = IngredientMask> {
    (0u16..1 << NUMBER_OF_INGREDIENTS).prop_map(IngredientMask::from_bits_truncated)
}

proptest! {
    /// `choose` is exactly bitwise OR: new bits appear, held bits stay.
    #[test]
    fn choose_is_bitwise_or(
        condition in arb_mask(),
        state in arb_mask(),
        gain in arb_mask(),
    ) {
        let mut agent = Agent::new(AgentId::new(0), condition, state);

        agent.choose(gain);

        prop_assert_eq!(agent.state(), state | gain);
        prop_assert!(agent.state().contains(state));
        prop_assert!(agent.state().contains(gain));
    }

    /// `lose` clears exactly the masked bits and nothing else.
    #[test]
    fn lose_clears_exactly_the_mask(
        condition in arb_mask(),
        state in arb_mask(),
        drop in arb_mask(),
    ) {
        let mut agent = Agent::new(AgentId::new(0), condition, state);

        agent.lose(drop);

        prop_assert_eq!(agent.state(), state.difference(drop));
        prop_assert!(!agent.state().intersects(drop));
    }

    /// Stealing moves bits: within the mask positions the total count
    /// across thief and target is conserved, outside them nothing
    /// changes.
    #[test]
    fn steal_conserves_ingredients(
        thief_state in arb_mask(),
        target_state in arb_mask(),
        mask in arb_mask(),
    ) {
        let mut thief = Agent::new(AgentId::new(0), IngredientMask::ALL, thief_state);
        let mut target = Agent::new(AgentId::new(1), IngredientMask::ALL, target_state);

        let masked_before = (thief.state() & mask).count() + (target.state() & mask).count();

        thief.steal_from(&mut target, mask);

        let masked_after = (thief.state() & mask).count() + (target.state() & mask).count();
        prop_assert_eq!(masked_before, masked_after);

        prop_assert_eq!(thief.state().difference(mask), thief_state.difference(mask));
        prop_assert_eq!(target.state().difference(mask), target_state.difference(mask));

        // Everything the target held under the mask ends up with the thief.
        prop_assert!(thief.state().contains(target_state & mask));
        prop_assert!((target.state() & mask).is_empty());
    }

    /// `has_won` is exact bit-for-bit equality.
    #[test]
    fn has_won_iff_states_match(condition in arb_mask(), state in arb_mask()) {
        let agent = Agent::new(AgentId::new(0), condition, state);

        prop_assert_eq!(agent.has_won(), condition == state);
    }

    /// `needed_mask` is the XOR of condition and state.
    #[test]
    fn needed_mask_is_xor(condition in arb_mask(), state in arb_mask()) {
        let agent = Agent::new(AgentId::new(0), condition, state);

        prop_assert_eq!(agent.needed_mask(), condition ^ state);
        prop_assert_eq!(agent.needed_count(), (condition ^ state).count());
    }
}
