use std::io::Write;

use snake_common::games::snake::{
    CellKind, GameEndReason, GameOverSummary, SnakeGameState, StateBroadcaster,
};
use snake_common::log;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn cell_char(cell: CellKind) -> char {
    match cell {
        CellKind::Empty => '.',
        CellKind::Head => '@',
        CellKind::Body => 'o',
        CellKind::Food => '*',
    }
}

pub fn status_line(state: &SnakeGameState) -> String {
    format!("Score: {} · {}", state.score, state.status().label())
}

pub fn render_board(state: &SnakeGameState) -> String {
    let mut out = String::with_capacity((state.field_size.width + 1) * state.field_size.height);
    for row in state.rows() {
        out.extend(row.into_iter().map(cell_char));
        out.push('\n');
    }
    out
}

pub fn end_reason_text(reason: Option<GameEndReason>) -> &'static str {
    match reason {
        Some(GameEndReason::WallCollision) => "hit the wall",
        Some(GameEndReason::SelfCollision) => "ran into itself",
        Some(GameEndReason::BoardFilled) => "filled the board",
        None => "stopped",
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &str) -> std::io::Result<()> {
    out.write_all(frame.as_bytes())?;
    out.flush()
}

/// Paints every snapshot to stdout.
pub struct TerminalBroadcaster;

impl StateBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: &SnakeGameState, tick: u64) {
        let frame = format!(
            "{}{}{} · tick {}\n[wasd/arrows] turn  [space] pause  [r] restart  [q] quit\n",
            CLEAR_SCREEN,
            render_board(state),
            status_line(state),
            tick
        );
        if let Err(e) = write_frame(&mut std::io::stdout().lock(), &frame) {
            log!("Failed to draw frame: {}", e);
        }
    }

    async fn broadcast_game_over(&self, summary: &GameOverSummary) {
        println!(
            "Game over: the snake {} after {} ticks. Final score: {}",
            end_reason_text(summary.end_reason),
            summary.ticks,
            summary.score
        );
        println!("Press [r] and Enter to play again, [q] to quit.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::{Direction, FieldSize, Point, Snake};

    fn state() -> SnakeGameState {
        SnakeGameState {
            field_size: FieldSize::new(4, 3),
            snake: Snake::from_segments(vec![Point::new(2, 1), Point::new(1, 1)]).unwrap(),
            direction: Direction::Right,
            food: Some(Point::new(0, 2)),
            score: 3,
            game_over: false,
            paused: false,
            end_reason: None,
        }
    }

    #[test]
    fn test_render_board() {
        assert_eq!(render_board(&state()), "....\n.o@.\n*...\n");
    }

    #[test]
    fn test_status_line() {
        let running = state();
        assert_eq!(status_line(&running), "Score: 3 · Running");
        assert_eq!(status_line(&running.toggle_pause()), "Score: 3 · Paused");

        let over = SnakeGameState {
            game_over: true,
            paused: true,
            ..running
        };
        assert_eq!(status_line(&over), "Score: 3 · Game Over");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_frame() {
        let mut out = Vec::new();
        write_frame(&mut out, "....\n").unwrap();
        assert_eq!(out, b"....\n");
    }

    #[test]
    fn test_write_frame_reports_write_error() {
        let result = write_frame(&mut BrokenPipe, "....\n");
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::BrokenPipe);
    }
}
