use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tick-rate presets offered by the speed selector.
///
/// The interval is re-read only when food is eaten, so a mid-session change
/// takes effect starting with the tick after the next pickup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedOption {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedOption {
    pub fn tick_interval(&self) -> Duration {
        let millis = match self {
            SpeedOption::Slow => 150,
            SpeedOption::Normal => 100,
            SpeedOption::Fast => 50,
        };
        Duration::from_millis(millis)
    }

    /// Forgiving conversion for live widget input. Unrecognized labels fall
    /// back to `Normal`.
    pub fn from_label(label: &str) -> SpeedOption {
        match label {
            "Slow" => SpeedOption::Slow,
            "Fast" => SpeedOption::Fast,
            _ => SpeedOption::Normal,
        }
    }
}
