//! Headless quest reward simulator CLI.
//!
//! Prints the tier × item table of expected per-quest yields for a quest's
//! two main reward rows.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --pools FILE    JSON quest file with "row_a" and "row_b" entry lists
//!                   (default: built-in World Eater example)
//!   --trials N      Trials per luck tier (default: 10000)
//!   --seed N        RNG seed for a reproducible run
//!   --json          Emit the table as JSON instead of text
//!   --quiet         Suppress the run banner
//!   --help, -h      Show this help

use lootsim::{run_simulation, LuckChances, PoolEntry, RewardPool, SimConfig};
use serde::Deserialize;
use std::error::Error;
use std::process;

/// On-disk quest definition: the two main reward rows.
#[derive(Debug, Deserialize)]
struct QuestFile {
    row_a: Vec<PoolEntry>,
    row_b: Vec<PoolEntry>,
}

struct CliConfig {
    pools_path: Option<String>,
    trials: u64,
    seed: Option<u64>,
    json: bool,
    quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pools_path: None,
            trials: 10_000,
            seed: None,
            json: false,
            quiet: false,
        }
    }
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pools" => {
                i += 1;
                config.pools_path = Some(args[i].clone());
            }
            "--trials" => {
                i += 1;
                config.trials = args[i].parse().expect("--trials requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(args[i].parse().expect("--seed requires a number"));
            }
            "--json" => config.json = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Quest Reward Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --pools FILE    JSON quest file with row_a/row_b entry lists\n\
         \x20 --trials N      Trials per luck tier (default: 10000)\n\
         \x20 --seed N        RNG seed for a reproducible run\n\
         \x20 --json          Emit the table as JSON instead of text\n\
         \x20 --quiet         Suppress the run banner\n\
         \x20 --help, -h      Show this help"
    );
}

/// Built-in example quest: World Eater (Deviljho) main rewards.
fn example_quest() -> Result<(RewardPool, RewardPool), Box<dyn Error>> {
    let row_a = RewardPool::from_pairs(
        "Row A",
        &[
            ("Timeworn charm", 0.33),
            ("Shining charm", 0.19),
            ("Deviljho gem", 0.04),
            ("Deviljho scalp", 0.08),
            ("Deviljho hide", 0.17),
            ("Deviljho fang", 0.08),
            ("Hvy armor sphere", 0.11),
        ],
    )?;
    let row_b = RewardPool::from_pairs(
        "Row B",
        &[
            ("Timeworn charm", 0.34),
            ("Shining charm", 0.11),
            ("Deviljho gem", 0.03),
            ("Deviljho scalp", 0.2),
            ("Deviljho hide", 0.17),
            ("Deviljho fang", 0.06),
            ("Hvy armor sphere", 0.09),
        ],
    )?;
    Ok((row_a, row_b))
}

fn load_quest(path: &str) -> Result<(RewardPool, RewardPool), Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let quest: QuestFile = serde_json::from_str(&raw)?;
    let row_a = RewardPool::new("Row A", quest.row_a)?;
    let row_b = RewardPool::new("Row B", quest.row_b)?;
    Ok((row_a, row_b))
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = parse_args();

    let (row_a, row_b) = match &cli.pools_path {
        Some(path) => load_quest(path)?,
        None => example_quest()?,
    };

    let config = SimConfig {
        trials: cli.trials,
        seed: cli.seed,
        chances: LuckChances::default(),
    };

    if !cli.quiet {
        eprintln!(
            "Simulating {} trials per luck tier ({} row A items, {} row B items)",
            config.trials,
            row_a.len(),
            row_b.len()
        );
    }

    let table = run_simulation(&row_a, &row_b, &config)?;

    if cli.json {
        println!("{}", table.to_json());
    } else {
        print!("{}", table.to_text());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
