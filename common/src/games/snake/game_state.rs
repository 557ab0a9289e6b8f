use serde::{Deserialize, Serialize};

use crate::games::RandomSource;
use super::entity::{INITIAL_LENGTH, Snake};
use super::placement::place_food;
use super::types::{CellKind, Direction, FieldSize, GameEndReason, GameStatus, Point, SnakeError};

/// One immutable snapshot of a game.
///
/// Every transition borrows the current snapshot and returns a new one; the
/// input is never modified. `game_over` is absorbing: once set, only a fresh
/// `initialize` leaves it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeGameState {
    pub field_size: FieldSize,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub end_reason: Option<GameEndReason>,
}

impl SnakeGameState {
    /// Three-segment snake heading right, head at the centre cell, with food
    /// placed from `rng`.
    pub fn initialize<R>(field_size: FieldSize, rng: &mut R) -> Result<Self, SnakeError>
    where
        R: RandomSource + ?Sized,
    {
        let too_small = SnakeError::FieldTooSmall {
            width: field_size.width,
            height: field_size.height,
        };
        if field_size.width < FieldSize::MIN_WIDTH || field_size.height < FieldSize::MIN_HEIGHT {
            return Err(too_small);
        }

        let head = Point::new(field_size.width / 2, field_size.height / 2);
        let snake = Snake::new(head, Direction::Right, INITIAL_LENGTH, &field_size).ok_or(too_small)?;
        let food = place_food(&snake, &field_size, rng);

        Ok(Self {
            field_size,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            game_over: false,
            paused: false,
            end_reason: None,
        })
    }

    /// Turning straight back onto the neck is ignored.
    #[must_use]
    pub fn set_direction(&self, direction: Direction) -> Self {
        if direction.is_opposite(&self.direction) {
            return self.clone();
        }
        Self {
            direction,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        if self.game_over {
            return self.clone();
        }
        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    /// Advances the game by one tick.
    ///
    /// The wall check runs before anything else. Growth is decided before the
    /// body check, because a growing snake keeps its tail and the tail cell
    /// then counts as occupied.
    #[must_use]
    pub fn step<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        if self.game_over || self.paused {
            return self.clone();
        }

        let Some(next_head) = self.snake.head().neighbour(self.direction, &self.field_size) else {
            return self.ended(GameEndReason::WallCollision);
        };

        let grows = self.food == Some(next_head);
        if self.snake.collides(&next_head, grows) {
            return self.ended(GameEndReason::SelfCollision);
        }

        let snake = self.snake.advanced(next_head, grows);
        if !grows {
            return Self { snake, ..*self };
        }

        let food = place_food(&snake, &self.field_size, rng);
        Self {
            snake,
            food,
            score: self.score + 1,
            game_over: food.is_none(),
            end_reason: food.is_none().then_some(GameEndReason::BoardFilled),
            ..*self
        }
    }

    fn ended(&self, reason: GameEndReason) -> Self {
        Self {
            game_over: true,
            end_reason: Some(reason),
            ..self.clone()
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn cell_at(&self, point: &Point) -> CellKind {
        if self.snake.head() == *point {
            CellKind::Head
        } else if self.snake.contains(point) {
            CellKind::Body
        } else if self.food.as_ref() == Some(point) {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    pub fn rows(&self) -> Vec<Vec<CellKind>> {
        (0..self.field_size.height)
            .map(|y| {
                (0..self.field_size.width)
                    .map(|x| self.cell_at(&Point::new(x, y)))
                    .collect()
            })
            .collect()
    }
}
