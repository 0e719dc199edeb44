//! Combat model for a card-based roguelike: shared hit point and block
//! bookkeeping, the player's energy pool and scripted enemy intents.

pub mod character;
pub mod config;
pub mod enemy;
pub mod error;
pub mod player;
pub mod report;
pub mod rng;

pub use character::{Character, Combatant};
pub use config::{EncounterConfig, EnemyConfig, PlayerConfig};
pub use enemy::{create_random_enemy, Enemy, EnemyKind, Intent, IntentPolicy, DEFEND_BLOCK};
pub use error::CombatError;
pub use player::{Card, Player};
pub use report::{CharacterSnapshot, EnemySnapshot, IntentTrace};
pub use rng::{CombatRng, RandomSource};
