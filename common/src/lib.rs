pub mod config;
pub mod games;
pub mod logger;
pub mod replay;
pub mod version;

pub use games::snake::{
    CellKind, Direction, FieldSize, GameEndReason, GameStatus, Point, Snake, SnakeError,
    SnakeGameState,
};
pub use games::{FixedRandom, RandomSource, SequenceRandom, SessionRng};
