use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::error::EngineError;

pub const DEFAULT_MAX_DEPTH: u8 = 6;
pub const MAX_SUPPORTED_DEPTH: u8 = 10;

/// Engine settings supplied by the host. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies. A forced pass consumes a ply.
    pub max_depth: u8,
    /// Side played by the engine; the human plays the other one.
    pub ai_side: Side,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ai_side: Side::Light,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_depth == 0 || self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(EngineError::InvalidDepth {
                depth: self.max_depth,
                max: MAX_SUPPORTED_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_depth_six_with_light_ai() {
        let config = EngineConfig::default();

        assert_eq!(config.max_depth, 6);
        assert_eq!(config.ai_side, Side::Light);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.ai_side, Side::Light);

        let config: EngineConfig = serde_json::from_str(r#"{"ai_side": "dark"}"#).unwrap();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.ai_side, Side::Dark);
    }

    #[test]
    fn validate_rejects_zero_and_excessive_depth() {
        for depth in [0, MAX_SUPPORTED_DEPTH + 1] {
            let config = EngineConfig {
                max_depth: depth,
                ..EngineConfig::default()
            };
            assert_eq!(
                config.validate().unwrap_err(),
                EngineError::InvalidDepth {
                    depth,
                    max: MAX_SUPPORTED_DEPTH
                }
            );
        }
    }
}
