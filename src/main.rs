use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use battleship_rules::{
    create_fleet, init_logging, play_ai_match, ship_type_from_name, FleetConfig, MatchConfig,
    PlayerId,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a full AI vs AI match and print the report as JSON.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON fleet configuration, defaults to the standard 10-ship roster")]
        fleet: Option<PathBuf>,
        #[arg(long, default_value = "Player 1")]
        player1: String,
        #[arg(long, default_value = "Player 2")]
        player2: String,
        #[arg(long, help = "Print both final boards to stderr")]
        show_boards: bool,
    },
    /// Print the fleet roster a configuration produces.
    Fleet {
        #[arg(long)]
        fleet: Option<PathBuf>,
        #[arg(long = "type", help = "Only list ships of this type (e.g., --type cruiser)")]
        ship_type: Option<String>,
    },
}

fn load_fleet(path: Option<&Path>) -> anyhow::Result<FleetConfig> {
    match path {
        None => Ok(FleetConfig::default()),
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading fleet config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing fleet config {}", path.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            seed,
            fleet,
            player1,
            player2,
            show_boards,
        } => {
            let mut rng = if let Some(s) = seed {
                log::info!("using fixed seed {}", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = MatchConfig {
                player1_name: player1,
                player2_name: player2,
                fleet: load_fleet(fleet.as_deref())?,
            };
            let (state, report) = play_ai_match(&config, &mut rng)?;

            if show_boards {
                for id in [PlayerId::Player1, PlayerId::Player2] {
                    let player = state.player(id);
                    eprintln!("{} ({})", player.name(), id);
                    eprintln!("{}", player.board().render(true));
                }
            }
            let out = json!({
                "winner": report.winner,
                "winner_name": state.player(report.winner).name(),
                "turn_count": report.turn_count,
                "shots": report.shots.len(),
                "players": report.players,
            });
            println!("{}", serde_json::to_string(&out)?);
        }
        Commands::Fleet { fleet, ship_type } => {
            let config = load_fleet(fleet.as_deref())?;
            let filter = ship_type
                .as_deref()
                .map(|name| {
                    ship_type_from_name(name).ok_or_else(|| anyhow!("unknown ship type `{}`", name))
                })
                .transpose()?;
            let ships: Vec<_> = create_fleet(&config)
                .into_iter()
                .filter(|ship| filter.map_or(true, |t| ship.ship_type() == t))
                .collect();
            let out = json!({
                "total_ships": config.total_ships(),
                "total_cells": config.total_cells(),
                "ships": ships,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
