//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::brief::BusinessBrief;
use crate::models::schedule::ContentSchedule;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub schedule: ContentSchedule,
    pub generated_at: DateTime<Utc>,
    pub generations_used: u32,
    pub generations_remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaResponse {
    pub limit: u32,
    pub used: u32,
    pub remaining: u32,
}

/// POST /api/v1/calendar/generate
///
/// Generates a new schedule from the brief and installs it as the live one.
/// On any failure the previous schedule stays in place and the quota is not charged.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(brief): Json<BusinessBrief>,
) -> Result<Json<GenerateResponse>, AppError> {
    brief.validate()?;

    let reservation = state.quota.try_reserve().inspect_err(|_| {
        warn!(limit = state.quota.limit(), "Generation refused: limit reached");
    })?;

    let schedule = match state.generator.generate(&brief).await {
        Ok(schedule) => schedule,
        Err(e) => {
            error!(niche = %brief.niche, "Error generating content: {e}");
            return Err(e);
        }
    };

    let installed = state.session.install(schedule).await;
    let used = reservation.commit();
    info!(niche = %installed.schedule.niche, used, "Installed new content schedule");

    Ok(Json(GenerateResponse {
        schedule: installed.schedule.as_ref().clone(),
        generated_at: installed.generated_at,
        generations_used: used,
        generations_remaining: state.quota.limit().saturating_sub(used),
    }))
}

/// GET /api/v1/calendar/quota
pub async fn handle_quota(State(state): State<AppState>) -> Json<QuotaResponse> {
    Json(QuotaResponse {
        limit: state.quota.limit(),
        used: state.quota.used(),
        remaining: state.quota.remaining(),
    })
}
