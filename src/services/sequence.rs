//! Acquisition-sequence description.
//!
//! Flattens a finished night plan into the structured description the
//! external acquisition-control software populates its sequence file from:
//! target identity, absolute instants, framing passthrough, and total
//! shoot duration per block. The downstream file format itself is owned by
//! that consumer, not by this engine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TargetId;
use crate::models::{EquatorialCoordinate, TargetEntry};
use crate::services::planner::NightPlan;

/// One exportable block of the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceBlock {
    pub target_id: TargetId,
    pub target_name: String,
    pub coord: EquatorialCoordinate,
    /// Framing parameters supplied by the catalog, passed through unchanged.
    pub framing: Option<serde_json::Value>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Effective imaging seconds, overhead excluded.
    pub shoot_seconds: i64,
    pub flip_instant: Option<DateTime<Utc>>,
}

/// Sequence description for one night and one setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencePlan {
    pub name: String,
    /// Calendar date of the evening the night begins, `YYYY-MM-DD`.
    pub date: String,
    pub blocks: Vec<SequenceBlock>,
}

/// Build the sequence description from a night plan.
///
/// An empty schedule yields an empty block list, which is a valid
/// (no-op) sequence rather than an error.
pub fn build_sequence(
    plan: &NightPlan,
    targets: &[TargetEntry],
    setup_name: &str,
    base_date: DateTime<Utc>,
) -> SequencePlan {
    let by_id: HashMap<TargetId, &TargetEntry> = targets.iter().map(|t| (t.id, t)).collect();
    let date = base_date.format("%Y-%m-%d").to_string();

    let blocks = plan
        .schedule
        .iter()
        .filter_map(|block| {
            let target = by_id.get(&block.target_id)?;
            Some(SequenceBlock {
                target_id: block.target_id,
                target_name: block.target_name.clone(),
                coord: target.coord,
                framing: target.framing.clone(),
                start: block.start,
                end: block.end,
                shoot_seconds: (block.effective_min * 60.0) as i64,
                flip_instant: block.flip.map(|f| f.instant),
            })
        })
        .collect();

    SequencePlan {
        name: format!("{} - {}", setup_name, date),
        date,
        blocks,
    }
}
