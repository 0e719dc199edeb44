use std::fs;
use std::path::Path;

use anyhow::{self, Context, Result};
use serde::Deserialize;

use crate::enemy::{create_random_enemy, Enemy, EnemyKind};
use crate::player::{
    Player, DEFAULT_MAX_ENERGY, DEFAULT_PLAYER_HP, DEFAULT_PLAYER_NAME, STARTING_GOLD,
};
use crate::rng::{RandomSource, DEFAULT_SEED};

const DEFAULT_ENEMY_COUNT: usize = 3;

/// Settings for setting up a single encounter, usually read from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub enemies: EnemyConfig,
}

impl EncounterConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: EncounterConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    /// Applies `COMBAT_SEED`, `COMBAT_PLAYER_NAME` and `COMBAT_PLAYER_HP` when set.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup("COMBAT_SEED").and_then(|val| val.parse().ok()) {
            self.seed = seed;
        }
        if let Some(name) = lookup("COMBAT_PLAYER_NAME") {
            self.player.name = name;
        }
        if let Some(hp) = lookup("COMBAT_PLAYER_HP").and_then(|val| val.parse().ok()) {
            self.player.max_hp = hp;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.player.max_hp == 0 {
            anyhow::bail!("player max_hp must be positive");
        }
        self.enemies.kinds()?;
        Ok(())
    }

    pub fn build_player(&self) -> Player {
        let mut player = Player::new(self.player.name.clone(), self.player.max_hp)
            .with_max_energy(self.player.max_energy);
        player.gold = self.player.gold;
        player
    }

    /// The explicit roster when one is configured, otherwise `count` random enemies.
    pub fn build_enemies(&self, rng: &mut dyn RandomSource) -> Result<Vec<Enemy>> {
        match self.enemies.kinds()? {
            Some(kinds) => Ok(kinds.into_iter().map(Enemy::from_kind).collect()),
            None => Ok((0..self.enemies.count)
                .map(|_| create_random_enemy(&mut *rng))
                .collect()),
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            player: PlayerConfig::default(),
            enemies: EnemyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub max_hp: u32,
    pub max_energy: u32,
    pub gold: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            max_hp: DEFAULT_PLAYER_HP,
            max_energy: DEFAULT_MAX_ENERGY,
            gold: STARTING_GOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemyConfig {
    #[serde(default = "default_enemy_count")]
    pub count: usize,
    #[serde(default)]
    pub roster: Option<Vec<String>>,
}

impl EnemyConfig {
    fn kinds(&self) -> Result<Option<Vec<EnemyKind>>> {
        let Some(roster) = self.roster.as_ref() else {
            return Ok(None);
        };
        let kinds = roster
            .iter()
            .map(|name| name.parse::<EnemyKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid enemy roster")?;
        Ok(Some(kinds))
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ENEMY_COUNT,
            roster: None,
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_enemy_count() -> usize {
    DEFAULT_ENEMY_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Combatant;
    use crate::rng::CombatRng;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = EncounterConfig::from_toml("").unwrap();
        assert_eq!(DEFAULT_SEED, cfg.seed);
        assert_eq!("Player", cfg.player.name);
        assert_eq!(80, cfg.player.max_hp);
        assert_eq!(3, cfg.player.max_energy);
        assert_eq!(100, cfg.player.gold);
        assert_eq!(3, cfg.enemies.count);
        assert!(cfg.enemies.roster.is_none());
    }

    #[test]
    fn partial_tables_fill_missing_fields() {
        let cfg = EncounterConfig::from_toml(
            r#"
            seed = 9

            [player]
            name = "Hero"
            max_energy = 4

            [enemies]
            roster = ["goblin", "Skeleton"]
            "#,
        )
        .unwrap();
        cfg.validate().unwrap();
        assert_eq!(9, cfg.seed);
        let player = cfg.build_player();
        assert_eq!("Hero: HP 80/80 | Energy: 4/4", player.status_text());

        let enemies = cfg.build_enemies(&mut CombatRng::new(cfg.seed)).unwrap();
        let kinds: Vec<_> = enemies.iter().filter_map(|e| e.kind()).collect();
        assert_eq!(vec![EnemyKind::Goblin, EnemyKind::Skeleton], kinds);
    }

    #[test]
    fn random_roster_respects_count() {
        let cfg = EncounterConfig::from_toml("[enemies]\ncount = 5").unwrap();
        let enemies = cfg.build_enemies(&mut CombatRng::default()).unwrap();
        assert_eq!(5, enemies.len());
        assert!(enemies.iter().all(|e| e.kind().is_some()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_hp = EncounterConfig::from_toml("[player]\nmax_hp = 0").unwrap();
        assert!(zero_hp.validate().is_err());

        let bad_roster = EncounterConfig::from_toml("[enemies]\nroster = [\"dragon\"]").unwrap();
        let err = bad_roster.validate().unwrap_err();
        assert!(format!("{err:#}").contains("dragon"));
    }

    #[test]
    fn overrides_replace_parsed_values() {
        let mut cfg = EncounterConfig::default();
        cfg.apply_overrides(|key| match key {
            "COMBAT_SEED" => Some("77".into()),
            "COMBAT_PLAYER_NAME" => Some("Ironclad".into()),
            "COMBAT_PLAYER_HP" => Some("not a number".into()),
            _ => None,
        });
        assert_eq!(77, cfg.seed);
        assert_eq!("Ironclad", cfg.player.name);
        assert_eq!(80, cfg.player.max_hp);
    }
}
