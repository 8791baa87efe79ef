//! Scheduling candidates and emitted schedule blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TargetId;
use crate::models::{NightWindow, TargetEntry};

/// A target paired with its visibility window and priority score for one
/// scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub target: TargetEntry,
    pub window: NightWindow,
    pub score: f64,
}

/// Meridian crossing inside a scheduled block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeridianFlip {
    pub instant: DateTime<Utc>,
    pub duration_min: f64,
}

/// One scheduled entry of the night plan.
///
/// `start`/`end` span the block on the night timeline; `shoot_start` is
/// `start` plus the initial slew and autofocus overhead, `shoot_end`
/// equals `end`. Blocks of one run are pairwise non-overlapping and
/// ordered by `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub target_id: TargetId,
    pub target_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub shoot_start: DateTime<Utc>,
    pub shoot_end: DateTime<Utc>,
    pub effective_min: f64,
    pub overhead_min: f64,
    pub score: f64,
    pub flip: Option<MeridianFlip>,
}

impl ScheduleBlock {
    /// Block length in minutes.
    pub fn block_minutes(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 60_000.0
    }
}
