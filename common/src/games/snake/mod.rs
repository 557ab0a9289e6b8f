mod entity;
mod game_state;
mod placement;
mod session;
mod settings;
mod types;

pub use entity::{INITIAL_LENGTH, Snake};
pub use game_state::SnakeGameState;
pub use placement::place_food;
pub use session::{GameOverSummary, SnakeCommand, SnakeSession, StateBroadcaster};
pub use settings::SnakeSettings;
pub use types::{CellKind, Direction, FieldSize, GameEndReason, GameStatus, Point, SnakeError};
