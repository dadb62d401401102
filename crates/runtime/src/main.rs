//! `grid-quest` command line entry point.
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Race, TurnReport, parse_script};
use runtime::{RuntimeConfig, Session, SessionSummary};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Turn-based grid adventure
#[derive(Parser)]
#[command(name = "grid-quest")]
#[command(about = "Explore a grid, collect gear and defeat every enemy", long_about = None)]
#[command(version)]
struct Cli {
    /// Player name
    #[arg(long)]
    name: Option<String>,

    /// Player race (human, elf, dwarf, hobbit, orc)
    #[arg(long)]
    race: Option<Race>,

    /// Board width, overriding the config file
    #[arg(long)]
    width: Option<usize>,

    /// Board height, overriding the config file
    #[arg(long)]
    height: Option<usize>,

    /// TOML file with game tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for every random draw
    #[arg(long)]
    seed: Option<u64>,

    /// Command keys to replay, e.g. "ddsjg"
    #[arg(long, conflicts_with = "script_file")]
    script: Option<String>,

    /// File holding command keys to replay
    #[arg(long)]
    script_file: Option<PathBuf>,

    /// RON item catalog to scatter instead of the starter loot
    #[arg(long)]
    items: Option<PathBuf>,

    /// RON enemy roster
    #[arg(long)]
    roster: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<(RuntimeConfig, Option<String>)> {
        let mut config = RuntimeConfig::from_env();

        if let Some(path) = &self.config {
            config = config.with_config_file(path)?;
        }
        if let Some(name) = self.name {
            config.player_name = name;
        }
        if let Some(race) = self.race {
            config.player_race = race;
        }
        if let Some(width) = self.width {
            config.game.board_width = width;
        }
        if let Some(height) = self.height {
            config.game.board_height = height;
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.items.is_some() {
            config.items_path = self.items;
        }
        if self.roster.is_some() {
            config.roster_path = self.roster;
        }

        let script = match (self.script, self.script_file) {
            (Some(script), _) => Some(script),
            (None, Some(path)) => Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script {}", path.display()))?,
            ),
            (None, None) => None,
        };

        Ok((config, script))
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let (config, script) = Cli::parse().into_config()?;
    let mut session = Session::start(config)?;
    tracing::info!(seed = session.seed(), "replay with --seed to reproduce this board");
    print_board(&session);

    let summary = match script {
        Some(script) => session.run_script_str(&script)?,
        None => play_interactive(&mut session)?,
    };

    print_board(&session);
    print_summary(&summary);
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Reads command keys line by line until `x`, end of input or game over.
fn play_interactive(session: &mut Session) -> Result<SessionSummary> {
    println!("Keys: w/a/s/d move, g pick up, j attack, k look, l inventory, h1-h3 or h4:n drop, x quit");

    let mut executed = 0;
    if session.world().is_over() {
        return Ok(session.summary(executed));
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().starts_with('x') {
            break;
        }

        let commands = match parse_script(&line) {
            Ok(commands) => commands,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        for command in commands {
            let report = session.execute(command)?;
            executed += 1;
            print_turn(&report);
            if report.status.is_over() {
                return Ok(session.summary(executed));
            }
        }
        print_board(session);
    }

    Ok(session.summary(executed))
}

fn print_turn(report: &TurnReport) {
    println!(
        "[{}] {} at {}",
        report.time_of_day, report.command, report.player_position
    );
}

fn print_board(session: &Session) {
    for row in session.world().board().render_rows() {
        println!("{row}");
    }
}

fn print_summary(summary: &SessionSummary) {
    println!(
        "{}: {} commands, {} gold, health {}/{}, {} enemies left, {}",
        summary.status,
        summary.commands_executed,
        summary.gold,
        summary.player_health,
        summary.player_max_health,
        summary.enemies_remaining,
        summary.time_of_day
    );
}
