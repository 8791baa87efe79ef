//! Overhead accounting.
//!
//! Converts a raw time block into effective shooting minutes after
//! subtracting the startup overhead (slew, initial autofocus, meridian
//! flip) and periodic autofocus runs. Closed-form: the periodic autofocus
//! count is taken from the post-startup shoot time and is not re-iterated
//! to a fixed point.

use serde::{Deserialize, Serialize};

use crate::models::ObservingSetup;

/// Result of overhead accounting for one block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveTime {
    pub effective_min: f64,
    pub overhead_min: f64,
}

/// Effective shooting minutes for a block of `window_min` minutes.
pub fn compute_effective(window_min: f64, setup: &ObservingSetup, has_flip: bool) -> EffectiveTime {
    let initial_overhead =
        setup.slew_min + setup.autofocus_min + if has_flip { setup.flip_min } else { 0.0 };
    let shoot_min = (window_min - initial_overhead).max(0.0);

    let autofocus_count = if setup.autofocus_interval_min > 0.0 {
        (shoot_min / setup.autofocus_interval_min).floor()
    } else {
        0.0
    };
    let overhead_min = initial_overhead + autofocus_count * setup.autofocus_min;

    EffectiveTime {
        effective_min: (window_min - overhead_min).max(0.0),
        overhead_min,
    }
}
