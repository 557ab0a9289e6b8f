use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::games::SessionRng;
use crate::log;
use crate::replay::{Replay, ReplayRecorder};
use crate::version::VERSION;
use super::game_state::SnakeGameState;
use super::settings::SnakeSettings;
use super::types::{Direction, GameEndReason, SnakeError};

/// Input events a driver feeds into a session between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub ticks: u64,
    pub end_reason: Option<GameEndReason>,
}

/// Receives every snapshot a running session produces.
pub trait StateBroadcaster {
    fn broadcast_state(&self, state: &SnakeGameState, tick: u64) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: &GameOverSummary) -> impl Future<Output = ()> + Send;
}

/// A game driven by an external clock: owns the current snapshot, the seeded
/// generator and, optionally, a replay recorder.
pub struct SnakeSession {
    settings: SnakeSettings,
    state: SnakeGameState,
    rng: SessionRng,
    tick: u64,
    replay_recorder: Option<ReplayRecorder>,
}

impl SnakeSession {
    pub fn new(settings: SnakeSettings, seed: u64) -> Result<Self, SnakeError> {
        let mut rng = SessionRng::new(seed);
        let state = SnakeGameState::initialize(settings.field_size(), &mut rng)?;
        Ok(Self {
            settings,
            state,
            rng,
            tick: 0,
            replay_recorder: None,
        })
    }

    pub fn with_replay_recording(mut self) -> Self {
        self.replay_recorder = Some(ReplayRecorder::new(
            VERSION.to_string(),
            self.rng.seed(),
            self.settings,
        ));
        self
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn apply(&mut self, command: SnakeCommand) {
        if let Some(recorder) = self.replay_recorder.as_mut() {
            recorder.record_command(self.tick, command);
        }

        match command {
            SnakeCommand::Turn(direction) => {
                self.state = self.state.set_direction(direction);
            }
            SnakeCommand::TogglePause => {
                self.state = self.state.toggle_pause();
            }
            SnakeCommand::Restart => {
                match SnakeGameState::initialize(self.settings.field_size(), &mut self.rng) {
                    Ok(state) => {
                        self.state = state;
                        log!("Game restarted at tick {}", self.tick);
                    }
                    Err(e) => log!("Failed to restart game: {}", e),
                }
            }
        }
    }

    pub fn tick(&mut self) -> &SnakeGameState {
        let next = self.state.step(&mut self.rng);
        self.tick += 1;

        if next.score > self.state.score {
            let head = next.snake.head();
            log!("Ate food at ({}, {}). Score: {}", head.x, head.y, next.score);
        }
        if next.game_over && !self.state.game_over {
            log!("Game over at tick {}: {:?}", self.tick, next.end_reason);
        }

        self.state = next;
        &self.state
    }

    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            score: self.state.score,
            ticks: self.tick,
            end_reason: self.state.end_reason,
        }
    }

    pub fn finish_replay(&mut self) -> Option<Replay> {
        let tick = self.tick;
        self.replay_recorder.as_mut().map(|recorder| recorder.finalize(tick))
    }

    /// Ticks on a fixed interval, applying commands between ticks in arrival
    /// order. Returns when the game ends or the command channel closes.
    pub async fn run<B>(
        &mut self,
        commands: &mut mpsc::UnboundedReceiver<SnakeCommand>,
        broadcaster: &B,
    ) -> GameOverSummary
    where
        B: StateBroadcaster,
    {
        let mut tick_interval_timer = interval(self.settings.tick_interval());
        tick_interval_timer.tick().await;

        broadcaster.broadcast_state(&self.state, self.tick).await;

        loop {
            tokio::select! {
                _ = tick_interval_timer.tick() => {
                    self.tick();
                    broadcaster.broadcast_state(&self.state, self.tick).await;
                    if self.state.game_over {
                        break;
                    }
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        log!("Command channel closed, stopping session");
                        break;
                    };
                    self.apply(command);
                    broadcaster.broadcast_state(&self.state, self.tick).await;
                }
            }
        }

        let summary = self.summary();
        if summary.end_reason.is_some() {
            broadcaster.broadcast_game_over(&summary).await;
        }
        summary
    }
}
