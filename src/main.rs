//! Command-line driver: deal a table, then play one or more games on it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use werewolf_sim::core::{GameConfig, GameRng};
use werewolf_sim::decision::{BabbleGenerator, DecisionProvider, GenerativeProvider, HumanProvider};
use werewolf_sim::experiment::{ExperimentConfig, ExperimentRunner};
use werewolf_sim::setup::{build_roster, player_names, SeatPlan};

/// Werewolf game moderator
#[derive(Parser, Debug)]
#[command(name = "werewolf-sim")]
#[command(about = "Moderate Werewolf games between humans and generated players", long_about = None)]
#[command(version)]
struct Cli {
    /// Total number of players
    #[arg(short = 'p', long = "players", default_value_t = 8)]
    players: usize,

    /// Number of human-controlled players (the first seats)
    #[arg(short = 'H', long = "human", default_value_t = 1)]
    human: usize,

    /// Number of games to play on the same table
    #[arg(short = 'r', long = "runs", default_value_t = 1)]
    runs: usize,

    /// Save each game's log as JSON (1) or not (0)
    #[arg(short = 's', long = "save-logs", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(0..=1))]
    save_logs: u8,

    /// Directory for saved game logs
    #[arg(short = 'o', long = "output-dir", default_value = "experiments_data")]
    output_dir: PathBuf,

    /// Seed for role dealing and generated players
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Longest filler run a generated player adds to a sentence
    #[arg(long, default_value_t = 12)]
    chatter: usize,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn provider_for(plan: &SeatPlan, config: &GameConfig, chatter: usize) -> Box<dyn DecisionProvider> {
    if plan.human {
        return Box::new(HumanProvider::stdio(plan.name.clone()));
    }
    let rng = GameRng::new(config.seed).for_context(&plan.name);
    let generator = BabbleGenerator::new(rng, player_names(config.player_count), chatter);
    Box::new(GenerativeProvider::new(plan.name.clone(), generator))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::new()
        .with_players(cli.players)
        .with_humans(cli.human)
        .with_seed(cli.seed);
    config.validate().context("invalid game configuration")?;
    info!(
        players = config.player_count,
        humans = config.human_count,
        werewolves = config.werewolf_count(),
        "setting up game"
    );

    let mut roster = build_roster(&config, |plan| provider_for(plan, &config, cli.chatter))
        .context("could not build the table")?;

    let runner = ExperimentRunner::new(
        ExperimentConfig::new()
            .with_runs(cli.runs)
            .with_save_logs(cli.save_logs == 1)
            .with_output_dir(cli.output_dir),
    );
    let outcomes = runner.run(&mut roster).context("game aborted")?;

    for outcome in &outcomes {
        match &outcome.path {
            Some(path) => println!(
                "Run {}: {} win after {} rounds (log: {})",
                outcome.run,
                outcome.winner,
                outcome.rounds,
                path.display()
            ),
            None => println!(
                "Run {}: {} win after {} rounds",
                outcome.run, outcome.winner, outcome.rounds
            ),
        }
    }
    Ok(())
}
