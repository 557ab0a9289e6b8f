use std::path::Path;

use snake_common::games::snake::{SnakeCommand, SnakeSession, SnakeSettings};
use snake_common::log;
use snake_common::replay::{generate_replay_filename, save_replay};
use snake_common::version::VERSION;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::ReplayConfig;
use crate::input::{InputEvent, parse_line};
use crate::render::TerminalBroadcaster;

/// Forwards stdin key presses as session commands. Quitting, or stdin
/// reaching EOF, drops the sender and so closes the channel.
pub fn spawn_input_task(command_tx: mpsc::UnboundedSender<SnakeCommand>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };

            for event in parse_line(&line) {
                match event {
                    InputEvent::Command(command) => {
                        if command_tx.send(command).is_err() {
                            return;
                        }
                    }
                    InputEvent::Quit => return,
                }
            }
        }
    });
}

pub async fn run_games(
    settings: SnakeSettings,
    replay_config: &ReplayConfig,
    first_seed: Option<u64>,
    command_rx: &mut mpsc::UnboundedReceiver<SnakeCommand>,
) -> Result<(), Box<dyn std::error::Error>> {
    let broadcaster = TerminalBroadcaster;
    let mut seed = first_seed.unwrap_or_else(rand::random);

    loop {
        let mut session = SnakeSession::new(settings, seed)?;
        if replay_config.save {
            session = session.with_replay_recording();
        }
        log!("Starting game with seed {}", session.seed());

        let summary = session.run(command_rx, &broadcaster).await;
        log!("Game finished: score {}, {} ticks", summary.score, summary.ticks);

        if let Some(replay) = session.finish_replay() {
            let replay_dir = Path::new(&replay_config.location);
            if let Err(e) = std::fs::create_dir_all(replay_dir) {
                log!("Failed to create replay directory: {}", e);
            } else {
                let file_path = replay_dir.join(generate_replay_filename(VERSION));
                match save_replay(&file_path, &replay) {
                    Ok(()) => log!("Replay saved to: {}", file_path.display()),
                    Err(e) => log!("Failed to save replay: {}", e),
                }
            }
        }

        if summary.end_reason.is_none() {
            return Ok(());
        }

        loop {
            match command_rx.recv().await {
                Some(SnakeCommand::Restart) => break,
                Some(_) => continue,
                None => return Ok(()),
            }
        }
        seed = rand::random();
    }
}
