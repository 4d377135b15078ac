//! The game engine: the single turn-resolution state machine.
//!
//! One engine instance owns the board, the action queue, all agents,
//! the shared board cursor, and the one RNG stream that feeds every
//! post-construction draw (dice, bit sampling, replenishment seeds).
//! Callers drive the game by calling [`GameEngine::step`] until it
//! reports a winner or an external turn cap is reached; the engine
//! never halts on its own.
//!
//! Reproducibility: a master seed derives the board, queue, and
//! condition seeds by fixed offsets, and the relative order of draws
//! from the engine stream is part of the contract. Two engines built
//! from the same seed replay identical games.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::constants::{
    MOVEMENT_DICE_COUNT, MOVEMENT_DICE_SIDES, NUMBER_OF_INGREDIENTS, NUMBER_OF_PLAYERS,
};
use crate::core::{Agent, AgentId, GameRng, IngredientMask};
use crate::error::GenerationError;
use crate::generate::{generate_action_queue, generate_board, generate_conditions, ActionCard, Tile};

use std::collections::VecDeque;

/// Scratch buffer for collecting set bit indices during sampling.
type BitBuf = SmallVec<[u8; NUMBER_OF_INGREDIENTS]>;

/// Core game engine.
pub struct GameEngine {
    /// Stream for all game randomness after construction.
    rng: GameRng,
    board: Vec<Tile>,
    action_queue: VecDeque<ActionCard>,
    agents: Vec<Agent>,
    /// Shared cursor: all agents advance along the same cyclic board.
    board_position: usize,
    current_agent_index: usize,
    turn_count: u64,
}

impl GameEngine {
    /// Build an engine from an optional master seed.
    ///
    /// Board, queue, and condition generation each get their own seed
    /// derived by fixed offset (`seed + 1..=3`), so the whole game is
    /// reproducible from the one master seed while the sub-generators
    /// stay independent. `None` leaves everything process-randomized.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerationError`] when condition generation fails;
    /// no partial engine is ever returned.
    pub fn new(seed: Option<u64>) -> Result<Self, GenerationError> {
        debug!(seed, "initializing game engine");

        let rng = GameRng::new(seed);

        let board_seed = seed.map(|s| s.wrapping_add(1));
        let queue_seed = seed.map(|s| s.wrapping_add(2));
        let condition_seed = seed.map(|s| s.wrapping_add(3));

        let board = generate_board(board_seed);
        let action_queue = generate_action_queue(queue_seed);
        let conditions = generate_conditions(condition_seed)?;

        let agents: Vec<Agent> = conditions
            .into_iter()
            .enumerate()
            .map(|(i, condition)| {
                Agent::new(AgentId::new(i as u8), condition, IngredientMask::EMPTY)
            })
            .collect();

        for agent in &agents {
            info!(
                agent = %agent.id(),
                needs = %agent.condition(),
                total_needed = agent.condition().count(),
                "agent created"
            );
        }

        let engine = Self {
            rng,
            board,
            action_queue,
            agents,
            board_position: 0,
            current_agent_index: 0,
            turn_count: 0,
        };

        info!(
            board_size = engine.board.len(),
            queue_size = engine.action_queue.len(),
            num_agents = engine.agents.len(),
            "game engine initialized"
        );

        Ok(engine)
    }

    /// The board, in cursor order.
    #[must_use]
    pub fn board(&self) -> &[Tile] {
        &self.board
    }

    /// All agents, indexed by agent ID.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The shared board cursor.
    #[must_use]
    pub const fn board_position(&self) -> usize {
        self.board_position
    }

    /// Completed turns so far.
    #[must_use]
    pub const fn turn_count(&self) -> u64 {
        self.turn_count
    }

    /// Cards left before the queue replenishes itself.
    #[must_use]
    pub fn action_queue_len(&self) -> usize {
        self.action_queue.len()
    }

    // =============================================================================
    // Movement
    // =============================================================================

    /// Roll the movement dice and return the summed total.
    fn roll_movement_dice(&mut self) -> u32 {
        let mut total = 0;

        for _ in 0..MOVEMENT_DICE_COUNT {
            total += self.rng.gen_range(1..=MOVEMENT_DICE_SIDES);
        }

        debug!(total, "movement dice rolled");

        total
    }

    /// Advance the shared cursor and return the tile landed on.
    fn advance_board(&mut self, steps: u32) -> Tile {
        let old_position = self.board_position;

        self.board_position = (self.board_position + steps as usize) % self.board.len();

        let tile = self.board[self.board_position];

        debug!(
            old_position,
            new_position = self.board_position,
            tile = %tile,
            "board advanced"
        );

        tile
    }

    // =============================================================================
    // Action queue
    // =============================================================================

    /// Pop the next action card, regenerating the queue when empty.
    ///
    /// The replenishment seed is drawn from the engine stream, so the
    /// refreshed queue is part of the reproducible sequence.
    fn pop_action(&mut self) -> ActionCard {
        loop {
            if let Some(action) = self.action_queue.pop_front() {
                debug!(action = %action, "action popped");

                return action;
            }

            let new_seed = self.rng.next_seed();
            self.action_queue = generate_action_queue(Some(new_seed));

            debug!(seed = new_seed, "action queue replenished");
        }
    }

    // =============================================================================
    // Mask computation
    // =============================================================================

    /// Ingredients the agent may still choose.
    fn choose_mask(agent: &Agent) -> IngredientMask {
        agent.needed_mask()
    }

    /// Ingredients the agent can be made to lose: held AND needed.
    fn lose_mask(agent: &Agent) -> IngredientMask {
        agent.state() & agent.needed_mask()
    }

    /// Ingredients the agent can steal: held by others AND needed.
    fn steal_mask(&self, agent_index: usize) -> IngredientMask {
        let mut other_owned = IngredientMask::EMPTY;

        for (index, other) in self.agents.iter().enumerate() {
            if index != agent_index {
                other_owned |= other.state();
            }
        }

        other_owned & self.agents[agent_index].needed_mask()
    }

    // =============================================================================
    // Bit selection
    // =============================================================================

    /// Uniformly select `count` distinct bits from `mask`.
    fn select_random_bits(&mut self, mask: IngredientMask, count: usize) -> IngredientMask {
        let available: BitBuf = mask.iter_bits().collect();
        self.rng.sample(&available, count).into_iter().collect()
    }

    // =============================================================================
    // Resolution helpers
    // =============================================================================

    /// Choose up to `amount` bits from `mask`: everything when the mask
    /// fits, otherwise a uniform random subset.
    fn auto_resolve_choose(&mut self, agent_index: usize, mask: IngredientMask, amount: usize) {
        let count = mask.count() as usize;

        if count == 0 {
            return;
        }

        if count <= amount {
            self.agents[agent_index].choose(mask);
            return;
        }

        let selected = self.select_random_bits(mask, amount);

        self.agents[agent_index].choose(selected);
    }

    /// Lose up to `amount` bits from `mask`, same selection policy.
    fn auto_resolve_lose(&mut self, agent_index: usize, mask: IngredientMask, amount: usize) {
        let count = mask.count() as usize;

        if count == 0 {
            return;
        }

        if count <= amount {
            self.agents[agent_index].lose(mask);
            return;
        }

        let selected = self.select_random_bits(mask, amount);

        self.agents[agent_index].lose(selected);
    }

    /// Steal up to `amount` bits from the other agents.
    ///
    /// The selected mask is applied against every other agent, so a bit
    /// held by several of them moves from all at once.
    fn auto_resolve_steal(&mut self, agent_index: usize, amount: usize) {
        let mask = self.steal_mask(agent_index);

        let count = mask.count() as usize;

        if count == 0 {
            return;
        }

        let selected = if count <= amount {
            mask
        } else {
            self.select_random_bits(mask, amount)
        };

        for other_index in 0..self.agents.len() {
            if other_index != agent_index {
                self.steal_between(agent_index, other_index, selected);
            }
        }
    }

    /// Run `steal_from` between two distinct agents by index.
    fn steal_between(&mut self, thief_index: usize, target_index: usize, mask: IngredientMask) {
        debug_assert_ne!(thief_index, target_index);

        if thief_index < target_index {
            let (left, right) = self.agents.split_at_mut(target_index);
            left[thief_index].steal_from(&mut right[0], mask);
        } else {
            let (left, right) = self.agents.split_at_mut(thief_index);
            right[0].steal_from(&mut left[target_index], mask);
        }
    }

    // =============================================================================
    // Tile and action resolution
    // =============================================================================

    /// Apply a tile's effect to the agent standing on it.
    fn resolve_tile(&mut self, agent_index: usize, tile: Tile) {
        debug!(agent = %self.agents[agent_index].id(), tile = %tile, "resolving tile");

        match tile {
            Tile::Ingredient(index) => {
                let mask = IngredientMask::from_bit(index);
                let agent = &mut self.agents[agent_index];

                // Landing on an already-satisfied ingredient does nothing.
                if mask.intersects(agent.needed_mask()) {
                    agent.choose(mask);
                }
            }
            Tile::ChooseAny => {
                let mask = Self::choose_mask(&self.agents[agent_index]);
                self.auto_resolve_choose(agent_index, mask, 2);
            }
            Tile::DrawAction => {
                let action = self.pop_action();
                self.resolve_action(agent_index, action);
            }
            Tile::LoseAll => {
                let agent = &mut self.agents[agent_index];
                agent.lose(agent.state());
            }
        }
    }

    /// Apply a drawn action card to the agent.
    fn resolve_action(&mut self, agent_index: usize, action: ActionCard) {
        info!(
            agent = %self.agents[agent_index].id(),
            action = %action,
            "resolving action from card"
        );

        match action {
            ActionCard::Choose(amount) => {
                let mask = Self::choose_mask(&self.agents[agent_index]);
                self.auto_resolve_choose(agent_index, mask, amount as usize);
            }
            ActionCard::Lose(amount) => {
                let mask = Self::lose_mask(&self.agents[agent_index]);
                self.auto_resolve_lose(agent_index, mask, amount as usize);
            }
            ActionCard::LoseAll => {
                // Unlike masked loses, this drops everything held.
                let agent = &mut self.agents[agent_index];
                agent.lose(agent.state());
            }
            ActionCard::Steal(amount) => {
                self.auto_resolve_steal(agent_index, amount as usize);
            }
        }
    }

    // =============================================================================
    // Game step
    // =============================================================================

    /// Execute exactly one turn for the current agent.
    ///
    /// Returns the winner's ID as soon as the acting agent's state
    /// matches their condition; the turn index and counter are not
    /// advanced past a win.
    pub fn step(&mut self) -> Option<AgentId> {
        let agent_index = self.current_agent_index;
        let agent_id = self.agents[agent_index].id();

        info!(turn = self.turn_count, agent = %agent_id, "turn started");

        let movement = self.roll_movement_dice();

        let tile = self.advance_board(movement);

        info!(
            agent = %agent_id,
            movement,
            position = self.board_position,
            tile = %tile,
            "agent landed on tile"
        );

        self.resolve_tile(agent_index, tile);

        if self.agents[agent_index].has_won() {
            info!(agent = %agent_id, turn = self.turn_count, "agent won");

            return Some(agent_id);
        }

        self.current_agent_index = (self.current_agent_index + 1) % NUMBER_OF_PLAYERS;

        self.turn_count += 1;

        None
    }
}
