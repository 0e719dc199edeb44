//! Serializable views of combat state for console output and golden tests.

use serde::Serialize;

use crate::character::Combatant;
use crate::enemy::{Enemy, Intent};
use crate::rng::RandomSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub block: u32,
    pub status: String,
}

impl CharacterSnapshot {
    pub fn of(combatant: &dyn Combatant) -> Self {
        let character = combatant.character();
        Self {
            name: character.name().to_string(),
            current_hp: character.current_hp(),
            max_hp: character.max_hp(),
            block: character.block(),
            status: combatant.status_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemySnapshot {
    pub status: String,
    pub description: String,
    pub intent: Intent,
    pub intent_damage: u32,
    pub intent_label: String,
}

impl EnemySnapshot {
    pub fn of(enemy: &Enemy) -> Self {
        Self {
            status: enemy.status_text(),
            description: enemy.description().to_string(),
            intent: enemy.intent(),
            intent_damage: enemy.intent_damage(),
            intent_label: enemy.intent_display(),
        }
    }
}

/// The intents an enemy announced over consecutive decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentTrace {
    pub enemy: String,
    pub intents: Vec<Intent>,
}

impl IntentTrace {
    pub fn record(enemy: &mut Enemy, rng: &mut dyn RandomSource, turns: usize) -> Self {
        let intents = (0..turns)
            .map(|_| {
                enemy.decide_action(&mut *rng);
                enemy.intent()
            })
            .collect();
        Self {
            enemy: enemy.name().to_string(),
            intents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::rng::CombatRng;

    #[test]
    fn player_snapshot_uses_overridden_status() {
        let mut player = Player::new("Hero", 80);
        player.gain_block(2);
        let snapshot = CharacterSnapshot::of(&player);
        assert_eq!(2, snapshot.block);
        assert_eq!("Hero: HP 80/80 [Block:2] | Energy: 3/3", snapshot.status);
    }

    #[test]
    fn enemy_snapshot_serializes_intent_lowercase() {
        let snapshot = EnemySnapshot::of(&Enemy::goblin());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!("attack", json["intent"]);
        assert_eq!(8, json["intent_damage"]);
    }

    #[test]
    fn trace_records_each_turn() {
        let mut skeleton = Enemy::skeleton();
        let trace = IntentTrace::record(&mut skeleton, &mut CombatRng::default(), 3);
        assert_eq!("Skeleton", trace.enemy);
        assert_eq!(
            vec![Intent::Attack, Intent::Defend, Intent::Attack],
            trace.intents
        );
    }
}
