use std::path::Path;

use super::{MAX_REPLAY_TICKS, REPLAY_FILE_EXTENSION, REPLAY_VERSION, Replay};
use crate::config::Validate;

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    DecodeError(serde_yaml_ng::Error),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
    InvalidSettings(String),
    TooManyTicks { found: u64, max: u64 },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::DecodeError(e) => write!(f, "Decode error: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
            ReplayError::InvalidSettings(e) => write!(f, "Invalid replay settings: {}", e),
            ReplayError::TooManyTicks { found, max } => {
                write!(f, "Replay too long: {} ticks, at most {} allowed", found, max)
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::DecodeError(e)
    }
}

pub fn save_replay_to_string(replay: &Replay) -> Result<String, ReplayError> {
    Ok(serde_yaml_ng::to_string(replay)?)
}

pub fn save_replay(path: &Path, replay: &Replay) -> Result<(), ReplayError> {
    let content = save_replay_to_string(replay)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_replay_from_str(content: &str) -> Result<Replay, ReplayError> {
    if content.trim().is_empty() {
        return Err(ReplayError::EmptyFile);
    }

    let replay: Replay = serde_yaml_ng::from_str(content)?;
    if replay.version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: replay.version,
            expected: REPLAY_VERSION,
        });
    }
    replay.settings.validate().map_err(ReplayError::InvalidSettings)?;
    if replay.total_ticks > MAX_REPLAY_TICKS {
        return Err(ReplayError::TooManyTicks {
            found: replay.total_ticks,
            max: MAX_REPLAY_TICKS,
        });
    }
    Ok(replay)
}

pub fn load_replay(path: &Path) -> Result<Replay, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    load_replay_from_str(&content)
}

pub fn generate_replay_filename(version: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");
    format!("{}_SNAKE_{}.{}", timestamp, sanitized_version, REPLAY_FILE_EXTENSION)
}
