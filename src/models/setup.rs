//! Equipment overhead parameters for one scheduling run.

use serde::{Deserialize, Serialize};

/// Mechanical overhead parameters of an imaging rig.
///
/// All durations are minutes. `autofocus_interval_min == 0` disables
/// periodic autofocus. Immutable per scheduling run; callers apply the
/// documented defaults before handing the setup to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservingSetup {
    /// Time to slew to a new target and settle.
    pub slew_min: f64,
    /// Duration of one autofocus routine.
    pub autofocus_min: f64,
    /// Interval between periodic autofocus runs (0 disables).
    pub autofocus_interval_min: f64,
    /// Duration of a meridian flip.
    pub flip_min: f64,
    /// Minimum effective shoot duration for a block to be worth scheduling.
    pub min_shoot_min: f64,
}

impl Default for ObservingSetup {
    fn default() -> Self {
        Self {
            slew_min: 5.0,
            autofocus_min: 10.0,
            autofocus_interval_min: 60.0,
            flip_min: 5.0,
            min_shoot_min: 30.0,
        }
    }
}
