mod random_source;
mod session_rng;

pub mod snake;

pub use random_source::{FixedRandom, RandomSource, SequenceRandom};
pub use session_rng::SessionRng;
