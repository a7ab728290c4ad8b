use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_DIMENSION: f32 = 200.0;
const MAX_DIMENSION: f32 = 4000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(format!(
                    "window {} must be between {} and {}, got {}",
                    name, MIN_DIMENSION, MAX_DIMENSION, value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}
