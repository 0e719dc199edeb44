//! Hit points and block shared by every combatant.

use serde::Serialize;
use tracing::debug;

/// Hit point and block state. Player and enemy both embed one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    name: String,
    max_hp: u32,
    current_hp: u32,
    block: u32,
}

impl Character {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            current_hp: max_hp,
            block: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn block(&self) -> u32 {
        self.block
    }

    /// Applies `damage`, draining block first. Returns only the portion
    /// that reached hit points.
    pub fn receive_damage(&mut self, damage: u32) -> u32 {
        let actual = damage.saturating_sub(self.block);
        self.block = self.block.saturating_sub(damage);
        self.current_hp = self.current_hp.saturating_sub(actual);
        debug!(
            target: "combat_core.character",
            name = %self.name,
            damage,
            actual,
            current = self.current_hp,
            block = self.block,
            "damage received"
        );
        actual
    }

    /// Restores up to `amount` hit points, capped at max. Returns the amount
    /// actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
        let healed = self.current_hp - before;
        debug!(
            target: "combat_core.character",
            name = %self.name,
            healed,
            current = self.current_hp,
            max = self.max_hp,
            "healed"
        );
        healed
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
        debug!(
            target: "combat_core.character",
            name = %self.name,
            block = self.block,
            "block gained"
        );
    }

    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn status_text(&self) -> String {
        let block = if self.block > 0 {
            format!(" [Block:{}]", self.block)
        } else {
            String::new()
        };
        format!("{}: HP {}/{}{block}", self.name, self.current_hp, self.max_hp)
    }
}

/// Anything that fights. Implementors hand out their [`Character`] and get
/// damage, healing and block handling for free; `status_text` may be
/// overridden to append extra information.
pub trait Combatant {
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    fn name(&self) -> &str {
        self.character().name()
    }

    fn receive_damage(&mut self, damage: u32) -> u32 {
        self.character_mut().receive_damage(damage)
    }

    fn heal(&mut self, amount: u32) -> u32 {
        self.character_mut().heal(amount)
    }

    fn gain_block(&mut self, amount: u32) {
        self.character_mut().gain_block(amount)
    }

    fn reset_block(&mut self) {
        self.character_mut().reset_block()
    }

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    fn status_text(&self) -> String {
        self.character().status_text()
    }
}
