//! Public API surface for the scheduling engine.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types produced by the service layer. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    Candidate, EquatorialCoordinate, GeoLocation, MeridianFlip, NightBounds, NightWindow,
    ObservingSetup, SamplingStep, ScheduleBlock, TargetEntry,
};
pub use crate::services::planner::{NightPlan, TargetNightSummary};
pub use crate::services::sequence::{SequenceBlock, SequencePlan};

use serde::{Deserialize, Serialize};

/// Target identifier (catalog primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub i64);

impl TargetId {
    pub fn new(value: i64) -> Self {
        TargetId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TargetId> for i64 {
    fn from(id: TargetId) -> Self {
        id.0
    }
}
