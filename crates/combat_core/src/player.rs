use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::character::{Character, Combatant};
use crate::error::CombatError;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_PLAYER_HP: u32 = 80;
pub const DEFAULT_MAX_ENERGY: u32 = 3;
pub const STARTING_GOLD: u32 = 100;

/// The minimum a card needs to be for energy checks. Effects live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub cost: u32,
}

impl Card {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    character: Character,
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    max_energy: u32,
    current_energy: u32,
    pub gold: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            character: Character::new(name, max_hp),
            deck: Vec::new(),
            hand: Vec::new(),
            discard_pile: Vec::new(),
            max_energy: DEFAULT_MAX_ENERGY,
            current_energy: DEFAULT_MAX_ENERGY,
            gold: STARTING_GOLD,
        }
    }

    /// Overrides the per-turn energy cap and refills to it.
    pub fn with_max_energy(mut self, max_energy: u32) -> Self {
        self.max_energy = max_energy;
        self.current_energy = max_energy;
        self
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn current_energy(&self) -> u32 {
        self.current_energy
    }

    /// Refills energy and drops last turn's block. Call once per player turn.
    pub fn start_turn(&mut self) {
        self.current_energy = self.max_energy;
        self.reset_block();
        debug!(target: "combat_core.player", energy = self.current_energy, "turn started");
    }

    pub fn can_use_card(&self, card: &Card) -> bool {
        self.current_energy >= card.cost
    }

    /// Spends up to `amount` energy, never going below zero. Returns what was
    /// actually spent.
    pub fn use_energy(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.current_energy);
        if spent < amount {
            warn!(
                target: "combat_core.player",
                requested = amount,
                available = self.current_energy,
                "energy overspend clamped"
            );
        }
        self.current_energy -= spent;
        spent
    }

    /// Pays the card's cost, or leaves energy untouched if it can't be afforded.
    pub fn pay_for(&mut self, card: &Card) -> Result<(), CombatError> {
        if !self.can_use_card(card) {
            return Err(CombatError::InsufficientEnergy {
                required: card.cost,
                available: self.current_energy,
            });
        }
        self.use_energy(card.cost);
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, DEFAULT_PLAYER_HP)
    }
}

impl Combatant for Player {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn status_text(&self) -> String {
        format!(
            "{} | Energy: {}/{}",
            self.character.status_text(),
            self.current_energy,
            self.max_energy
        )
    }
}
