//! Helpers for deterministic regression tests.

use combat_core::{CharacterSnapshot, CombatRng, Combatant, Enemy, EnemyKind, IntentTrace, Player};
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_SEED: u64 = 42;

pub fn sample_intent_trace(kind: EnemyKind, seed: u64, turns: usize) -> serde_json::Value {
    let mut rng = CombatRng::new(seed);
    let mut enemy = Enemy::from_kind(kind);
    let trace = IntentTrace::record(&mut enemy, &mut rng, turns);
    json!({ "seed": seed, "trace": trace })
}

pub fn sample_roster(seed: u64, count: usize) -> Vec<EnemyKind> {
    let mut rng = CombatRng::new(seed);
    (0..count)
        .filter_map(|_| combat_core::create_random_enemy(&mut rng).kind())
        .collect()
}

#[derive(Debug, Serialize)]
pub struct WalkthroughStep {
    pub step: &'static str,
    pub player: CharacterSnapshot,
}

/// Damage, heal, block, then damage through block on a fresh 80 HP hero.
pub fn hero_walkthrough() -> Vec<WalkthroughStep> {
    let mut hero = Player::new("Hero", 80);
    let mut steps = vec![WalkthroughStep {
        step: "created",
        player: CharacterSnapshot::of(&hero),
    }];
    let mut record = |step, hero: &Player| {
        steps.push(WalkthroughStep {
            step,
            player: CharacterSnapshot::of(hero),
        })
    };

    hero.receive_damage(10);
    record("took 10 damage", &hero);
    hero.heal(5);
    record("healed 5", &hero);
    hero.gain_block(10);
    record("gained 10 block", &hero);
    hero.receive_damage(15);
    record("took 15 damage", &hero);

    steps
}

#[derive(Debug, Serialize)]
pub struct DuelLog {
    pub messages: Vec<String>,
    pub player: CharacterSnapshot,
    pub enemy_status: String,
}

/// Lets one enemy act against an idle hero for `turns` turns.
pub fn enemy_duel(kind: EnemyKind, seed: u64, turns: usize) -> DuelLog {
    let mut rng = CombatRng::new(seed);
    let mut hero = Player::new("Hero", 80);
    let mut enemy = Enemy::from_kind(kind);
    let messages = (0..turns)
        .map(|_| {
            enemy.decide_action(&mut rng);
            enemy.take_action(&mut hero)
        })
        .collect();
    DuelLog {
        messages,
        player: CharacterSnapshot::of(&hero),
        enemy_status: enemy.status_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_is_deterministic() {
        let a = sample_intent_trace(EnemyKind::Slime, DEFAULT_SEED, 10);
        let b = sample_intent_trace(EnemyKind::Slime, DEFAULT_SEED, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn walkthrough_ends_at_seventy() {
        let steps = hero_walkthrough();
        assert_eq!(5, steps.len());
        let last = &steps[4].player;
        assert_eq!(70, last.current_hp);
        assert_eq!(0, last.block);
    }
}
