//! Data Transfer Objects for the HTTP API.
//!
//! The planner request carries everything a run needs (date, location,
//! setup, targets); validation and default-filling happen here so the
//! engine only ever sees validated numeric inputs. Response types are the
//! service-layer DTOs, re-exported unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::config::EngineConfig;
use crate::models::{GeoLocation, ObservingSetup, TargetEntry};

// Re-export existing DTOs that are already serializable
pub use crate::api::{NightPlan, ScheduleBlock, SequenceBlock, SequencePlan, TargetNightSummary};

/// Request body shared by the preview and sequence endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightPlanRequest {
    /// Calendar date of the evening the observing night begins, `YYYY-MM-DD`.
    pub date: String,
    pub location: LocationParams,
    /// Overhead parameters; absent fields take the configured defaults.
    #[serde(default)]
    pub setup: SetupParams,
    pub targets: Vec<TargetEntry>,
}

/// Observer location; horizon falls back to the configured default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationParams {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub horizon_deg: Option<f64>,
}

/// Partial observing setup from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slew_min: Option<f64>,
    #[serde(default)]
    pub autofocus_min: Option<f64>,
    #[serde(default)]
    pub autofocus_interval_min: Option<f64>,
    #[serde(default)]
    pub flip_min: Option<f64>,
    #[serde(default)]
    pub min_shoot_min: Option<f64>,
}

/// Validated planner inputs after default-filling.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub base_date: DateTime<Utc>,
    pub location: GeoLocation,
    pub setup: ObservingSetup,
    pub setup_name: String,
    pub targets: Vec<TargetEntry>,
}

impl NightPlanRequest {
    /// Validate the request and fill defaults from the configuration.
    pub fn validate(self, config: &EngineConfig) -> Result<ValidatedRequest, AppError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", self.date)))?;
        let base_date = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| AppError::BadRequest("invalid date".to_string()))?
            .and_utc();

        if !(-90.0..=90.0).contains(&self.location.latitude_deg) {
            return Err(AppError::BadRequest(format!(
                "latitude {} out of range [-90, 90]",
                self.location.latitude_deg
            )));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude_deg) {
            return Err(AppError::BadRequest(format!(
                "longitude {} out of range [-180, 180]",
                self.location.longitude_deg
            )));
        }

        for target in &self.targets {
            if !(0.0..24.0).contains(&target.coord.ra_hours) {
                return Err(AppError::BadRequest(format!(
                    "target {}: RA {} out of range [0, 24)",
                    target.id, target.coord.ra_hours
                )));
            }
            if !(-90.0..=90.0).contains(&target.coord.dec_deg) {
                return Err(AppError::BadRequest(format!(
                    "target {}: Dec {} out of range [-90, 90]",
                    target.id, target.coord.dec_deg
                )));
            }
        }

        let defaults = &config.setup_defaults;
        let location = GeoLocation {
            latitude_deg: self.location.latitude_deg,
            longitude_deg: self.location.longitude_deg,
            horizon_deg: self.location.horizon_deg.unwrap_or(defaults.horizon_deg),
        };
        let setup = ObservingSetup {
            slew_min: self.setup.slew_min.unwrap_or(defaults.slew_min),
            autofocus_min: self.setup.autofocus_min.unwrap_or(defaults.autofocus_min),
            autofocus_interval_min: self
                .setup
                .autofocus_interval_min
                .unwrap_or(defaults.autofocus_interval_min),
            flip_min: self.setup.flip_min.unwrap_or(defaults.flip_min),
            min_shoot_min: self.setup.min_shoot_min.unwrap_or(defaults.min_shoot_min),
        };

        Ok(ValidatedRequest {
            base_date,
            location,
            setup,
            setup_name: self.setup.name.unwrap_or_else(|| "setup".to_string()),
            targets: self.targets,
        })
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
