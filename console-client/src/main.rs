mod advice;
mod command;
mod config;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Difficulty, GameMode};
use tictactoe_engine::{log, logger};

use config::{ConfigContentProvider, ConfigManager, ConsoleConfig, FileContentConfigProvider, MemoryContentProvider};
use runner::ConsoleRunner;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe in the terminal, alone against the bot or with a friend")]
struct Args {
    /// YAML file holding difficulty, mode and the score tally
    #[arg(long, default_value = "tictactoe_console.yaml")]
    config: PathBuf,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// ai or pvp
    #[arg(long)]
    mode: Option<GameMode>,

    /// Seed for the easy/medium bot and the flavor text
    #[arg(long)]
    seed: Option<u64>,

    /// Keep scores and settings in memory only
    #[arg(long)]
    no_save: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.no_save {
        run(ConfigManager::yaml(MemoryContentProvider::new()), &args)
    } else {
        run(ConfigManager::yaml(FileContentConfigProvider::new(args.config.clone())), &args)
    }
}

fn run<P: ConfigContentProvider>(
    mut config_manager: ConfigManager<P, ConsoleConfig>,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting: mode {}, difficulty {}, seed {}",
        config.mode,
        config.difficulty,
        rng.seed()
    );

    let mut runner = ConsoleRunner::new(config_manager, config, rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    runner.run(stdin.lock(), &mut stdout)?;

    log!("Bye");
    Ok(())
}
