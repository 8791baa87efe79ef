//! HTTP handlers for the REST API.
//!
//! Each handler validates the request, then runs the planning pipeline
//! inside `spawn_blocking` since the visibility sweep is CPU-bound.

use axum::{extract::State, Json};

use super::dto::{HealthResponse, NightPlanRequest};
use super::error::AppError;
use super::state::AppState;
use crate::api::{NightPlan, SequencePlan};
use crate::models::SamplingStep;
use crate::services::{build_sequence, plan_night};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /v1/night-plan/preview
///
/// Interactive preview: the full night plan (rows, bounds, schedule)
/// computed at the coarse sampling step.
pub async fn preview_night_plan(
    State(state): State<AppState>,
    Json(request): Json<NightPlanRequest>,
) -> HandlerResult<NightPlan> {
    let plan = run_plan(&state, request, SamplingStep::Coarse).await?;
    Ok(Json(plan))
}

/// POST /v1/night-plan/sequence
///
/// Authoritative export: the acquisition-sequence description computed at
/// the fine sampling step. An empty schedule yields an empty block list.
pub async fn export_sequence(
    State(state): State<AppState>,
    Json(request): Json<NightPlanRequest>,
) -> HandlerResult<SequencePlan> {
    let validated = request.validate(&state.config)?;
    let classifier = state.classifier.clone();

    let sequence = tokio::task::spawn_blocking(move || {
        let plan = plan_night(
            &validated.targets,
            &validated.location,
            &validated.setup,
            validated.base_date,
            SamplingStep::Fine,
            classifier.as_ref(),
        );
        build_sequence(
            &plan,
            &validated.targets,
            &validated.setup_name,
            validated.base_date,
        )
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(sequence))
}

async fn run_plan(
    state: &AppState,
    request: NightPlanRequest,
    step: SamplingStep,
) -> Result<NightPlan, AppError> {
    let validated = request.validate(&state.config)?;
    let classifier = state.classifier.clone();

    tokio::task::spawn_blocking(move || {
        plan_night(
            &validated.targets,
            &validated.location,
            &validated.setup,
            validated.base_date,
            step,
            classifier.as_ref(),
        )
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}
