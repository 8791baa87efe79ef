//! Target priority scoring.
//!
//! Combines window quality, Moon geometry, and exposure-goal deficit into a
//! single comparable score. The separation factor is a deliberate step
//! function rather than a continuous curve so a plan stays auditable by eye.

use serde::{Deserialize, Serialize};

/// Moon-illumination penalty weight for broadband targets.
const BROADBAND_MOON_WEIGHT: f64 = 1.0;
/// Narrowband imaging is far less Moon-sensitive.
const NARROWBAND_MOON_WEIGHT: f64 = 0.15;

/// Default type-label keywords marking a target as narrowband.
///
/// Union of the matchers the surrounding application has used for emission
/// nebulae, HII regions, supernova remnants, and planetary nebulae.
pub const DEFAULT_NARROWBAND_KEYWORDS: &[&str] = &[
    "neb",
    "hii",
    "snr",
    "pn",
    "emission",
    "supernova",
    "remnant",
    "planetary",
];

/// Priority score of a target for one night. Always `>= 0`.
///
/// Zero useful hours yields zero. When the target has an unmet exposure
/// goal (`deficit_hours > 0`), the visibility score is multiplied by the
/// deficit to bias strongly toward targets falling behind.
pub fn priority_score(
    useful_hours: f64,
    moon_illumination: f64,
    min_moon_separation_deg: Option<f64>,
    deficit_hours: f64,
    narrowband: bool,
) -> f64 {
    let moon_weight = if narrowband {
        NARROWBAND_MOON_WEIGHT
    } else {
        BROADBAND_MOON_WEIGHT
    };
    let moon_factor = (1.0 - moon_illumination * moon_weight).max(0.0);

    let separation_factor = match min_moon_separation_deg {
        None => 0.0,
        Some(sep) if sep < 20.0 => 0.1,
        Some(sep) if sep < 40.0 => 0.5,
        Some(sep) if sep < 60.0 => 0.8,
        Some(_) => 1.0,
    };

    let visibility_score = useful_hours * moon_factor * separation_factor;

    if deficit_hours > 0.0 {
        deficit_hours * visibility_score
    } else {
        visibility_score
    }
}

/// Keyword-based narrowband classifier over free-text target type labels.
///
/// The keyword list is injected configuration, not a hardcoded heuristic;
/// matching is case-insensitive substring containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrowbandClassifier {
    keywords: Vec<String>,
}

impl NarrowbandClassifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    pub fn is_narrowband(&self, type_label: &str) -> bool {
        if type_label.is_empty() {
            return false;
        }
        let label = type_label.to_lowercase();
        self.keywords.iter().any(|k| label.contains(k.as_str()))
    }
}

impl Default for NarrowbandClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NARROWBAND_KEYWORDS.iter().copied())
    }
}
