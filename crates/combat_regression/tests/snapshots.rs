use combat_core::EnemyKind;
use combat_regression::{enemy_duel, hero_walkthrough, sample_intent_trace, DEFAULT_SEED};

#[test]
fn hero_walkthrough_snapshot() {
    let steps = hero_walkthrough();
    insta::assert_json_snapshot!("hero_walkthrough", steps);
}

#[test]
fn skeleton_intents_snapshot() {
    let trace = sample_intent_trace(EnemyKind::Skeleton, DEFAULT_SEED, 6);
    insta::assert_json_snapshot!("skeleton_intents", trace["trace"]);
}

#[test]
fn skeleton_duel_snapshot() {
    let log = enemy_duel(EnemyKind::Skeleton, DEFAULT_SEED, 4);
    insta::assert_json_snapshot!("skeleton_duel", log);
}
