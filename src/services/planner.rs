//! Night planning orchestration.
//!
//! One scheduling run: night bounds, per-target visibility and score, and
//! the greedy schedule. This is the single pipeline behind both consumers;
//! the interactive preview and the authoritative sequence export differ
//! only in the [`SamplingStep`] they pass.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::TargetId;
use crate::models::{
    Candidate, GeoLocation, NightBounds, ObservingSetup, SamplingStep, ScheduleBlock, TargetEntry,
};
use crate::services::night_scheduler::build_schedule;
use crate::services::night_window::{compute_night_bounds, compute_night_window};
use crate::services::priority::{priority_score, NarrowbandClassifier};

/// Per-target visibility summary for tabular or chart display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetNightSummary {
    pub target_id: TargetId,
    pub target_name: String,
    pub useful_hours: f64,
    pub window_start: Option<DateTime<Utc>>,
    pub window_end: Option<DateTime<Utc>>,
    pub min_moon_separation_deg: Option<f64>,
    pub moon_illumination: f64,
    pub narrowband: bool,
    pub deficit_hours: f64,
    pub score: f64,
}

/// Full result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightPlan {
    pub bounds: NightBounds,
    /// All evaluated targets, sorted by descending score.
    pub rows: Vec<TargetNightSummary>,
    /// Ordered, non-overlapping schedule blocks.
    pub schedule: Vec<ScheduleBlock>,
}

/// Run the whole pipeline for one night.
///
/// Targets with zero useful hours appear in `rows` with a zero score but
/// are never scheduled. The classifier resolves the narrowband flag for
/// targets that do not carry an explicit tag.
pub fn plan_night(
    targets: &[TargetEntry],
    location: &GeoLocation,
    setup: &ObservingSetup,
    base_date: DateTime<Utc>,
    step: SamplingStep,
    classifier: &NarrowbandClassifier,
) -> NightPlan {
    let bounds = compute_night_bounds(location, base_date);

    let mut candidates: Vec<Candidate> = Vec::with_capacity(targets.len());
    let mut rows: Vec<TargetNightSummary> = Vec::with_capacity(targets.len());

    for target in targets {
        let window = compute_night_window(location, target.coord, base_date, step);
        let narrowband = target
            .narrowband
            .unwrap_or_else(|| classifier.is_narrowband(&target.type_label));
        let score = priority_score(
            window.useful_hours,
            window.moon_illumination,
            window.min_moon_separation_deg,
            target.deficit_hours,
            narrowband,
        );

        rows.push(TargetNightSummary {
            target_id: target.id,
            target_name: target.name.clone(),
            useful_hours: window.useful_hours,
            window_start: window.start,
            window_end: window.end,
            min_moon_separation_deg: window.min_moon_separation_deg,
            moon_illumination: window.moon_illumination,
            narrowband,
            deficit_hours: target.deficit_hours,
            score,
        });

        if window.is_visible() {
            candidates.push(Candidate {
                target: target.clone(),
                window,
                score,
            });
        }
    }

    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let schedule = build_schedule(&candidates, &bounds, location, setup);
    debug!(
        "planned night {}: {} candidates, {} blocks",
        base_date.format("%Y-%m-%d"),
        candidates.len(),
        schedule.len()
    );

    NightPlan {
        bounds,
        rows,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paris() -> GeoLocation {
        GeoLocation::new(48.86, 2.35)
    }

    fn january_night() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_rows_sorted_by_score() {
        let targets = vec![
            TargetEntry::new(1, "M42", 5.59, -5.39),
            TargetEntry::new(2, "M42-behind", 5.59, -5.39).with_deficit(10.0),
        ];
        let plan = plan_night(
            &targets,
            &paris(),
            &ObservingSetup::default(),
            january_night(),
            SamplingStep::Fine,
            &NarrowbandClassifier::default(),
        );

        assert_eq!(plan.rows.len(), 2);
        // The deficit target must outrank the identical one without deficit.
        assert_eq!(plan.rows[0].target_id.value(), 2);
        assert!(plan.rows[0].score >= plan.rows[1].score);
    }

    #[test]
    fn test_invisible_target_reported_with_zero_score() {
        let targets = vec![TargetEntry::new(1, "south-pole", 14.0, -85.0)];
        let plan = plan_night(
            &targets,
            &paris(),
            &ObservingSetup::default(),
            january_night(),
            SamplingStep::Fine,
            &NarrowbandClassifier::default(),
        );

        assert_eq!(plan.rows.len(), 1);
        assert_eq!(plan.rows[0].score, 0.0);
        assert!(plan.rows[0].window_start.is_none());
        assert!(plan.schedule.is_empty());
    }

    #[test]
    fn test_explicit_narrowband_tag_overrides_classifier() {
        let mut tagged = TargetEntry::new(1, "M42", 5.59, -5.39).with_type("Galaxy");
        tagged.narrowband = Some(true);
        let classified = TargetEntry::new(2, "M43", 5.59, -5.39).with_type("Emission Neb");

        let plan = plan_night(
            &[tagged, classified],
            &paris(),
            &ObservingSetup::default(),
            january_night(),
            SamplingStep::Fine,
            &NarrowbandClassifier::default(),
        );

        for row in &plan.rows {
            assert!(row.narrowband, "row {} not narrowband", row.target_id);
        }
    }
}
