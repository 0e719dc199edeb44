//! Enemies, their intents and the policies that pick them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::character::{Character, Combatant};
use crate::error::CombatError;
use crate::rng::RandomSource;

/// Block gained by a defending enemy, independent of its attack power.
pub const DEFEND_BLOCK: u32 = 5;

const SLIME_ATTACK_CHANCE: f64 = 0.7;

/// What an enemy has announced it will do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Attack,
    Defend,
    Unknown,
}

/// How an enemy picks its next intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IntentPolicy {
    AlwaysAttack,
    /// Independent draw each decision; attacks when the draw is below the chance.
    Random { attack_chance: f64 },
    /// Attack on even counts, defend on odd. The count advances every decision.
    Alternating { action_count: u32 },
}

impl IntentPolicy {
    fn next_intent(&mut self, rng: &mut dyn RandomSource) -> Intent {
        match self {
            IntentPolicy::AlwaysAttack => Intent::Attack,
            IntentPolicy::Random { attack_chance } => {
                if rng.next_unit() < *attack_chance {
                    Intent::Attack
                } else {
                    Intent::Defend
                }
            }
            IntentPolicy::Alternating { action_count } => {
                let intent = if *action_count % 2 == 0 {
                    Intent::Attack
                } else {
                    Intent::Defend
                };
                *action_count += 1;
                intent
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Slime,
    Goblin,
    Skeleton,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Slime, EnemyKind::Goblin, EnemyKind::Skeleton];

    pub fn display_name(&self) -> &'static str {
        match self {
            EnemyKind::Slime => "Slime",
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Skeleton => "Skeleton",
        }
    }

    pub fn max_hp(&self) -> u32 {
        match self {
            EnemyKind::Slime => 20,
            EnemyKind::Goblin => 30,
            EnemyKind::Skeleton => 25,
        }
    }

    pub fn attack_damage(&self) -> u32 {
        match self {
            EnemyKind::Slime => 5,
            EnemyKind::Goblin => 8,
            EnemyKind::Skeleton => 7,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EnemyKind::Slime => "A trembling green blob",
            EnemyKind::Goblin => "Small but vicious",
            EnemyKind::Skeleton => "Walking bones of unknown origin",
        }
    }

    fn policy(&self) -> IntentPolicy {
        match self {
            EnemyKind::Slime => IntentPolicy::Random {
                attack_chance: SLIME_ATTACK_CHANCE,
            },
            EnemyKind::Goblin => IntentPolicy::AlwaysAttack,
            EnemyKind::Skeleton => IntentPolicy::Alternating { action_count: 0 },
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EnemyKind {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnemyKind::ALL
            .into_iter()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CombatError::UnknownEnemyKind(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    character: Character,
    attack_damage: u32,
    description: String,
    intent: Intent,
    intent_damage: u32,
    policy: IntentPolicy,
    kind: Option<EnemyKind>,
}

impl Enemy {
    /// A plain enemy that always attacks.
    pub fn new(name: impl Into<String>, max_hp: u32, attack_damage: u32) -> Self {
        Self {
            character: Character::new(name, max_hp),
            attack_damage,
            description: String::new(),
            intent: Intent::Attack,
            intent_damage: attack_damage,
            policy: IntentPolicy::AlwaysAttack,
            kind: None,
        }
    }

    pub fn from_kind(kind: EnemyKind) -> Self {
        Self {
            policy: kind.policy(),
            kind: Some(kind),
            ..Self::new(kind.display_name(), kind.max_hp(), kind.attack_damage())
                .with_description(kind.description())
        }
    }

    pub fn slime() -> Self {
        Self::from_kind(EnemyKind::Slime)
    }

    pub fn goblin() -> Self {
        Self::from_kind(EnemyKind::Goblin)
    }

    pub fn skeleton() -> Self {
        Self::from_kind(EnemyKind::Skeleton)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_policy(mut self, policy: IntentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn attack_damage(&self) -> u32 {
        self.attack_damage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn intent_damage(&self) -> u32 {
        self.intent_damage
    }

    pub fn policy(&self) -> &IntentPolicy {
        &self.policy
    }

    pub fn kind(&self) -> Option<EnemyKind> {
        self.kind
    }

    /// Forces the announced intent, bypassing the policy.
    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
        self.intent_damage = match intent {
            Intent::Attack => self.attack_damage,
            Intent::Defend | Intent::Unknown => 0,
        };
    }

    /// Picks the next intent. Call once per enemy turn, before `take_action`.
    pub fn decide_action(&mut self, rng: &mut dyn RandomSource) {
        let intent = self.policy.next_intent(rng);
        self.set_intent(intent);
        debug!(
            target: "combat_core.enemy",
            name = %self.character.name(),
            ?intent,
            damage = self.intent_damage,
            "intent decided"
        );
    }

    /// Carries out the current intent against `target` and returns a log line.
    pub fn take_action(&mut self, target: &mut dyn Combatant) -> String {
        let message = match self.intent {
            Intent::Attack => {
                target.receive_damage(self.attack_damage);
                format!(
                    "{} attacks! {} takes {} damage!",
                    self.character.name(),
                    target.name(),
                    self.attack_damage
                )
            }
            Intent::Defend => {
                self.gain_block(DEFEND_BLOCK);
                format!(
                    "{} braces itself and gains {DEFEND_BLOCK} block!",
                    self.character.name()
                )
            }
            Intent::Unknown => format!("{} is watching closely...", self.character.name()),
        };
        info!(target: "combat_core.enemy", "{message}");
        message
    }

    pub fn intent_display(&self) -> String {
        match self.intent {
            Intent::Attack => format!("🗡️ Attack ({} damage)", self.intent_damage),
            Intent::Defend => "🛡️ Defend".to_string(),
            Intent::Unknown => "❓ Unknown".to_string(),
        }
    }
}

impl Combatant for Enemy {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

/// Builds one of the known enemy kinds, chosen uniformly.
pub fn create_random_enemy(rng: &mut dyn RandomSource) -> Enemy {
    let kind = EnemyKind::ALL[rng.next_index(EnemyKind::ALL.len())];
    Enemy::from_kind(kind)
}
