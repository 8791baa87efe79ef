//! Night visibility windows and whole-night darkness bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sampling step for the visibility sweep.
///
/// The interactive preview uses the coarse 30-minute step for
/// responsiveness; the authoritative sequence export uses the fine
/// 15-minute step. Both run the same formulas, so window boundaries and
/// useful hours may differ by up to half an hour between the two. That
/// divergence is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingStep {
    Coarse,
    Fine,
}

impl SamplingStep {
    /// Step length in minutes.
    pub fn minutes(&self) -> f64 {
        match self {
            SamplingStep::Coarse => 30.0,
            SamplingStep::Fine => 15.0,
        }
    }

    /// Step length in hours.
    pub fn hours(&self) -> f64 {
        self.minutes() / 60.0
    }
}

/// Visibility result for one target on one night.
///
/// `start`/`end` are `None` when the target never qualifies; in that case
/// `useful_hours` is 0 and `min_moon_separation_deg` is `None`.
/// `moon_illumination` is sampled at the first useful instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    pub useful_hours: f64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub min_moon_separation_deg: Option<f64>,
    pub moon_illumination: f64,
}

impl NightWindow {
    /// Window with no qualifying sample.
    pub fn empty() -> Self {
        Self {
            useful_hours: 0.0,
            start: None,
            end: None,
            min_moon_separation_deg: None,
            moon_illumination: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Astronomical darkness bounds for one night at one site.
///
/// Both bounds are `None` under polar-day conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightBounds {
    pub dusk: Option<DateTime<Utc>>,
    pub dawn: Option<DateTime<Utc>>,
}

impl NightBounds {
    pub fn is_dark_at_all(&self) -> bool {
        self.dusk.is_some() && self.dawn.is_some()
    }
}
