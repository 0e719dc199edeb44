use combat_core::{EnemyKind, Intent};
use combat_regression::{sample_intent_trace, sample_roster};

#[test]
fn slime_intents_follow_the_seed() {
    let baseline = slime_intents(42);
    let repeat = slime_intents(42);
    assert_eq!(baseline, repeat, "same seed should match");

    let different = slime_intents(7);
    assert_ne!(baseline, different, "different seeds should diverge");
}

#[test]
fn slime_mixes_attack_and_defend() {
    let intents = slime_intents(42);
    let attacks = intents.iter().filter(|i| **i == "attack").count();
    assert!(attacks > 0 && attacks < intents.len());
    assert!(intents.iter().all(|i| i == "attack" || i == "defend"));
}

#[test]
fn roster_follows_the_seed() {
    assert_eq!(sample_roster(42, 12), sample_roster(42, 12));
    assert_eq!(12, sample_roster(3, 12).len());
}

#[test]
fn goblin_ignores_the_seed() {
    let a = sample_intent_trace(EnemyKind::Goblin, 1, 8);
    let b = sample_intent_trace(EnemyKind::Goblin, 2, 8);
    assert_eq!(a["trace"], b["trace"]);
    let expected = serde_json::to_value(vec![Intent::Attack; 8]).unwrap();
    assert_eq!(expected, a["trace"]["intents"]);
}

fn slime_intents(seed: u64) -> Vec<String> {
    let value = sample_intent_trace(EnemyKind::Slime, seed, 48);
    value["trace"]["intents"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
