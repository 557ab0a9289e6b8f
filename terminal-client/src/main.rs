mod config;
mod input;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use snake_common::replay::{ReplayPlayer, load_replay};
use snake_common::{log, logger};
use tokio::sync::mpsc;

use render::{render_board, status_line};

#[derive(Parser)]
#[command(name = "snake_terminal")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the first game; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Re-run a saved replay headlessly and print the final board.
    #[arg(long)]
    replay: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn play_back(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let replay = load_replay(path)?;
    let mut player = ReplayPlayer::new(replay);
    log!(
        "Replaying {} actions over {} ticks (seed {}, engine {})",
        player.total_actions(),
        player.total_ticks(),
        player.seed(),
        player.engine_version()
    );

    let state = player.simulate()?;
    print!("{}", render_board(&state));
    println!("{}", status_line(&state));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(path) = args.replay.as_deref() {
        return play_back(path);
    }

    let config = config::get_config_manager(args.config.as_deref()).get_config()?;
    log!(
        "Field {}x{}, tick {} ms",
        config.snake.field_width,
        config.snake.field_height,
        config.snake.tick_interval_ms
    );

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    runner::spawn_input_task(command_tx);
    runner::run_games(config.snake, &config.replays, args.seed, &mut command_rx).await?;

    log!("Bye");
    Ok(())
}
