use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::FieldSize;

pub const DEFAULT_FIELD_WIDTH: u32 = 20;
pub const DEFAULT_FIELD_HEIGHT: u32 = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 140;
pub const DEFAULT_CELL_PX: u32 = 20;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SnakeSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    /// Pixels per cell for graphical renderers.
    pub cell_px: u32,
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width as usize, self.field_height as usize)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        let min_width = FieldSize::MIN_WIDTH as u32;
        let min_height = FieldSize::MIN_HEIGHT as u32;
        if self.field_width < min_width || self.field_width > 100 {
            return Err(format!("Field width must be between {} and 100", min_width));
        }
        if self.field_height < min_height || self.field_height > 100 {
            return Err(format!("Field height must be between {} and 100", min_height));
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.cell_px < 1 || self.cell_px > 128 {
            return Err("Cell size must be between 1 and 128 pixels".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SnakeSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.field_size(), FieldSize::new(20, 20));
        assert_eq!(settings.tick_interval(), Duration::from_millis(140));
    }

    #[test]
    fn test_rejects_narrow_field() {
        let settings = SnakeSettings {
            field_width: 3,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_fast_tick() {
        let settings = SnakeSettings {
            tick_interval_ms: 10,
            ..SnakeSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err("Tick interval must be between 50ms and 5000ms".to_string())
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: SnakeSettings = serde_yaml_ng::from_str("field_width: 12\n").unwrap();
        assert_eq!(settings.field_width, 12);
        assert_eq!(settings.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(settings.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }
}
