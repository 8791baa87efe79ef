//! Greedy night scheduler.
//!
//! Single forward pass over the night: from dusk, repeatedly pick the
//! highest-scoring unused candidate that still yields a worthwhile block
//! from the cursor, schedule it to the end of its window, and advance. No
//! backtracking and no look-ahead; the result is locally score-maximizing,
//! not globally duration-optimal, which keeps the plan explainable.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::api::TargetId;
use crate::models::{
    Candidate, GeoLocation, MeridianFlip, NightBounds, ObservingSetup, ScheduleBlock,
};
use crate::services::meridian_flip::find_flip_instant;
use crate::services::overhead::{compute_effective, EffectiveTime};

/// Evaluation of one candidate against the current cursor.
struct BlockEvaluation {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    flip: Option<DateTime<Utc>>,
    effective: EffectiveTime,
}

/// Assemble the ordered, non-overlapping schedule for one night.
///
/// Candidates with no window are never eligible; each target is scheduled
/// at most once. Returns an empty schedule when the night has no darkness
/// bounds or no candidate yields at least `min_shoot_min` effective
/// minutes from the cursor.
pub fn build_schedule(
    candidates: &[Candidate],
    bounds: &NightBounds,
    location: &GeoLocation,
    setup: &ObservingSetup,
) -> Vec<ScheduleBlock> {
    let (Some(dusk), Some(dawn)) = (bounds.dusk, bounds.dawn) else {
        return Vec::new();
    };

    let mut schedule = Vec::new();
    let mut used: HashSet<TargetId> = HashSet::new();
    let mut cursor = dusk;

    while cursor < dawn {
        let mut best: Option<(&Candidate, BlockEvaluation)> = None;
        let mut best_score = f64::NEG_INFINITY;

        for candidate in candidates {
            if used.contains(&candidate.target.id) {
                continue;
            }
            let Some(evaluation) = evaluate_block(candidate, cursor, dawn, location, setup) else {
                continue;
            };
            // Strict comparison: ties go to the first-seen candidate.
            if candidate.score > best_score {
                best_score = candidate.score;
                best = Some((candidate, evaluation));
            }
        }

        let Some((candidate, evaluation)) = best else {
            break;
        };

        debug!(
            "scheduling target {} [{} .. {}] effective {:.0} min",
            candidate.target.id, evaluation.start, evaluation.end, evaluation.effective.effective_min
        );

        used.insert(candidate.target.id);
        cursor = evaluation.end;
        schedule.push(emit_block(candidate, evaluation, setup));
    }

    schedule
}

/// Evaluate one candidate from the cursor; `None` when the block is not
/// worth scheduling.
fn evaluate_block(
    candidate: &Candidate,
    cursor: DateTime<Utc>,
    dawn: DateTime<Utc>,
    location: &GeoLocation,
    setup: &ObservingSetup,
) -> Option<BlockEvaluation> {
    let (window_start, window_end) = (candidate.window.start?, candidate.window.end?);

    let start = cursor.max(window_start);
    if start >= window_end || start >= dawn {
        return None;
    }

    let flip = find_flip_instant(
        candidate.target.coord.ra_hours,
        location.longitude_deg,
        start,
        window_end,
    );

    let block_min = (window_end - start).num_milliseconds() as f64 / 60_000.0;
    let effective = compute_effective(block_min, setup, flip.is_some());
    if effective.effective_min < setup.min_shoot_min {
        return None;
    }

    Some(BlockEvaluation {
        start,
        end: window_end,
        flip,
        effective,
    })
}

fn emit_block(
    candidate: &Candidate,
    evaluation: BlockEvaluation,
    setup: &ObservingSetup,
) -> ScheduleBlock {
    let startup_overhead =
        Duration::seconds(((setup.slew_min + setup.autofocus_min) * 60.0).round() as i64);

    ScheduleBlock {
        target_id: candidate.target.id,
        target_name: candidate.target.name.clone(),
        start: evaluation.start,
        end: evaluation.end,
        shoot_start: evaluation.start + startup_overhead,
        shoot_end: evaluation.end,
        effective_min: evaluation.effective.effective_min,
        overhead_min: evaluation.effective.overhead_min,
        score: candidate.score,
        flip: evaluation.flip.map(|instant| MeridianFlip {
            instant,
            duration_min: setup.flip_min,
        }),
    }
}
