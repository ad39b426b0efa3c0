//! Engine tuning knobs.

use quarterturn_core::Float;
use quarterturn_core::scramble::DEFAULT_SCRAMBLE_LENGTH;
use serde::{Deserialize, Serialize};

/// User-tunable engine preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnginePreferences {
    /// Fixed angular step per frame, in radians. The rotation speed is tied
    /// to the frame rate, not the wall clock.
    pub turn_rate: Float,
    /// Number of quarter turns in a scramble.
    pub scramble_length: u32,
}

impl Default for EnginePreferences {
    fn default() -> Self {
        EnginePreferences {
            turn_rate: 0.15,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}
