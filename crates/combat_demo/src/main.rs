use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use combat_core::{
    CharacterSnapshot, CombatRng, Combatant, EncounterConfig, Enemy, EnemyKind, EnemySnapshot,
    IntentTrace, Player,
};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Exercise the card battle combat model from the console")]
struct Cli {
    /// Encounter settings (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the configured seed.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Print JSON instead of status lines.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted damage/heal/block walkthrough and one decision per enemy kind.
    Showcase,
    /// Show the intents an enemy picks over several turns.
    Intents(IntentsArgs),
    /// Build the configured enemy roster.
    Roster,
}

#[derive(Args)]
struct IntentsArgs {
    /// Enemy kind, or `random`.
    #[arg(long, default_value = "random")]
    enemy: String,
    #[arg(long, default_value_t = 6)]
    turns: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut rng = CombatRng::new(config.seed);
    debug!(target: "combat_demo", seed = rng.seed(), "rng ready");

    match &cli.command {
        Commands::Showcase => handle_showcase(&config, &mut rng, cli.json),
        Commands::Intents(args) => handle_intents(args, &mut rng, cli.json),
        Commands::Roster => handle_roster(&config, &mut rng, cli.json),
    }
}

fn load_config(cli: &Cli) -> Result<EncounterConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => EncounterConfig::from_path(path)?,
        None => EncounterConfig::default(),
    };
    config.apply_env();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn handle_showcase(config: &EncounterConfig, rng: &mut CombatRng, as_json: bool) -> Result<()> {
    let mut player = config.build_player();
    let mut steps = vec![("created".to_string(), CharacterSnapshot::of(&player))];

    player.receive_damage(10);
    steps.push(("took 10 damage".into(), CharacterSnapshot::of(&player)));
    player.heal(5);
    steps.push(("healed 5".into(), CharacterSnapshot::of(&player)));
    player.gain_block(10);
    steps.push(("gained 10 block".into(), CharacterSnapshot::of(&player)));
    let actual = player.receive_damage(15);
    steps.push((
        format!("took 15 damage ({actual} through block)"),
        CharacterSnapshot::of(&player),
    ));

    let enemies: Vec<EnemySnapshot> = EnemyKind::ALL
        .into_iter()
        .map(|kind| {
            let mut enemy = Enemy::from_kind(kind);
            enemy.decide_action(&mut *rng);
            EnemySnapshot::of(&enemy)
        })
        .collect();

    if as_json {
        let steps: Vec<_> = steps
            .iter()
            .map(|(label, snapshot)| json!({ "step": label, "player": snapshot }))
            .collect();
        let out = json!({ "seed": rng.seed(), "player": steps, "enemies": enemies });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("=== Player ===");
    for (label, snapshot) in &steps {
        println!("{label}: {}", snapshot.status);
    }
    println!();
    println!("=== Enemies ===");
    for enemy in &enemies {
        println!("{} - intent: {}", enemy.status, enemy.intent_label);
    }
    Ok(())
}

fn handle_intents(args: &IntentsArgs, rng: &mut CombatRng, as_json: bool) -> Result<()> {
    let mut enemy = if args.enemy.eq_ignore_ascii_case("random") {
        combat_core::create_random_enemy(rng)
    } else {
        Enemy::from_kind(args.enemy.parse()?)
    };
    let trace = IntentTrace::record(&mut enemy, rng, args.turns);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    println!("{} ({})", trace.enemy, enemy.description());
    for (turn, intent) in trace.intents.iter().enumerate() {
        println!("turn {:>2}: {intent:?}", turn + 1);
    }
    Ok(())
}

fn handle_roster(config: &EncounterConfig, rng: &mut CombatRng, as_json: bool) -> Result<()> {
    let player: Player = config.build_player();
    let enemies = config.build_enemies(rng)?;
    let snapshots: Vec<EnemySnapshot> = enemies.iter().map(EnemySnapshot::of).collect();

    if as_json {
        let out = json!({
            "seed": rng.seed(),
            "player": CharacterSnapshot::of(&player),
            "gold": player.gold,
            "enemies": snapshots,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} | Gold: {}", player.status_text(), player.gold);
    for snapshot in &snapshots {
        println!("  {} - {}", snapshot.status, snapshot.description);
    }
    Ok(())
}
