use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReplayConfig {
    pub save: bool,
    pub location: String,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            save: false,
            location: "snakereplays".to_string(),
        }
    }
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("replay location must not be empty".to_string());
        }
        Ok(())
    }
}
