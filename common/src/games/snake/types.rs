use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction`, or `None` when it falls outside
    /// `field_size`. There is no wrap-around.
    pub fn neighbour(&self, direction: Direction, field_size: &FieldSize) -> Option<Point> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        let next = Point::new(x, y);
        field_size.contains(&next).then_some(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    /// Smallest field that fits the three-segment starting snake.
    pub const MIN_WIDTH: usize = 4;
    pub const MIN_HEIGHT: usize = 1;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Every cell in row-major order: `y` outer, `x` inner.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    FieldTooSmall { width: usize, height: usize },
}

impl std::fmt::Display for SnakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeError::FieldTooSmall { width, height } => write!(
                f,
                "Field {}x{} is too small, minimum is {}x{}",
                width,
                height,
                FieldSize::MIN_WIDTH,
                FieldSize::MIN_HEIGHT
            ),
        }
    }
}

impl std::error::Error for SnakeError {}
