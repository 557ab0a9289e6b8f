use crate::games::snake::{SnakeError, SnakeGameState, SnakeSession};
use super::{Replay, ReplayAction};

pub struct ReplayPlayer {
    replay: Replay,
    current_action_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            current_action_index: 0,
        }
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.engine_version
    }

    pub fn seed(&self) -> u64 {
        self.replay.seed
    }

    pub fn total_ticks(&self) -> u64 {
        self.replay.total_ticks
    }

    pub fn total_actions(&self) -> usize {
        self.replay.actions.len()
    }

    pub fn current_action_index(&self) -> usize {
        self.current_action_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_action_index >= self.replay.actions.len()
    }

    pub fn peek_next_action(&self) -> Option<&ReplayAction> {
        self.replay.actions.get(self.current_action_index)
    }

    /// Returns the actions recorded at `tick`, skipping any left behind at
    /// earlier ticks.
    pub fn actions_for_tick(&mut self, tick: u64) -> Vec<ReplayAction> {
        let mut actions = Vec::new();
        while let Some(action) = self.replay.actions.get(self.current_action_index) {
            if action.tick > tick {
                break;
            }
            if action.tick == tick {
                actions.push(*action);
            }
            self.current_action_index += 1;
        }
        actions
    }

    pub fn reset(&mut self) {
        self.current_action_index = 0;
    }

    /// Re-runs the whole game from the seed and returns the final snapshot.
    pub fn simulate(&mut self) -> Result<SnakeGameState, SnakeError> {
        self.reset();
        let mut session = SnakeSession::new(self.replay.settings, self.replay.seed)?;

        while session.current_tick() < self.replay.total_ticks {
            if session.state().game_over && self.is_finished() {
                break;
            }
            for action in self.actions_for_tick(session.current_tick()) {
                session.apply(action.command);
            }
            session.tick();
        }
        for action in self.actions_for_tick(session.current_tick()) {
            session.apply(action.command);
        }

        Ok(session.state().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{Direction, SnakeCommand, SnakeSettings};
    use crate::replay::{MAX_REPLAY_TICKS, REPLAY_VERSION};

    fn create_test_replay() -> Replay {
        Replay {
            version: REPLAY_VERSION,
            engine_version: "1.0.0".to_string(),
            game_started_timestamp_ms: 1234567890,
            seed: 42,
            settings: SnakeSettings::default(),
            total_ticks: 10,
            actions: vec![
                ReplayAction { tick: 0, command: SnakeCommand::Turn(Direction::Up) },
                ReplayAction { tick: 1, command: SnakeCommand::Turn(Direction::Left) },
                ReplayAction { tick: 3, command: SnakeCommand::TogglePause },
                ReplayAction { tick: 7, command: SnakeCommand::TogglePause },
            ],
        }
    }

    #[test]
    fn test_actions_for_tick() {
        let mut player = ReplayPlayer::new(create_test_replay());
        assert_eq!(player.actions_for_tick(0).len(), 1);
        assert_eq!(player.actions_for_tick(1)[0].command, SnakeCommand::Turn(Direction::Left));
        assert!(player.actions_for_tick(2).is_empty());
        assert_eq!(player.actions_for_tick(3)[0].command, SnakeCommand::TogglePause);
        assert_eq!(player.current_action_index(), 3);
    }

    #[test]
    fn test_actions_for_tick_skips_missed() {
        let mut player = ReplayPlayer::new(create_test_replay());
        assert!(player.actions_for_tick(5).is_empty());
        assert_eq!(player.peek_next_action().map(|a| a.tick), Some(7));
    }

    #[test]
    fn test_reset() {
        let mut player = ReplayPlayer::new(create_test_replay());
        player.actions_for_tick(10);
        assert!(player.is_finished());
        player.reset();
        assert_eq!(player.current_action_index(), 0);
        assert_eq!(player.total_actions(), 4);
    }

    #[test]
    fn test_simulate_applies_pause_window() {
        let mut player = ReplayPlayer::new(create_test_replay());
        let state = player.simulate().unwrap();
        let start = SnakeSession::new(SnakeSettings::default(), 42).unwrap();
        let head = start.state().snake.head();

        // One tick up, two left, four paused, three more left.
        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.snake.head().x, head.x - 5);
        assert_eq!(state.snake.head().y, head.y - 1);
        assert!(!state.paused);
    }

    #[test]
    fn test_simulate_stops_after_game_over() {
        let mut replay = create_test_replay();
        replay.settings.field_width = 4;
        replay.settings.field_height = 1;
        replay.total_ticks = MAX_REPLAY_TICKS;
        replay.actions.clear();
        let mut player = ReplayPlayer::new(replay);
        let state = player.simulate().unwrap();
        assert!(state.game_over);
    }
}
