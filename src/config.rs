use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::search::tt::DEFAULT_CAPACITY;

/// Feature switches and tunables for one engine instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub use_tt: bool,
    /// Transposition table size in entries.
    pub tt_capacity: usize,
    pub use_killers: bool,
    /// Keep searching captures and check evasions past the nominal depth.
    pub use_quiescence: bool,
    /// Depth at which quiescence stops unconditionally.
    pub quiescence_floor: i32,
    pub use_aspiration: bool,
    pub aspiration_window_cp: i32,
    /// Multiplier applied to the failed side of the window before a retry.
    pub aspiration_widen: i32,
    pub max_depth: i32,
    /// Per-move budget is `remaining / time_divisor + increment`.
    pub time_divisor: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_tt: true,
            tt_capacity: DEFAULT_CAPACITY,
            use_killers: true,
            use_quiescence: true,
            quiescence_floor: -2,
            use_aspiration: true,
            aspiration_window_cp: 25,
            aspiration_widen: 4,
            max_depth: 64,
            time_divisor: 50,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
