pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route(
            "/api/v1/calendar/generate",
            post(generation::handle_generate),
        )
        .route("/api/v1/calendar/quota", get(generation::handle_quota))
        // Calendar views and exports
        .route("/api/v1/calendar", get(calendar::handle_get_calendar))
        .route(
            "/api/v1/calendar/content-types",
            get(calendar::handle_content_types),
        )
        .route(
            "/api/v1/calendar/export.csv",
            get(calendar::handle_export_current),
        )
        .route("/api/v1/calendar/filter", post(calendar::handle_filter))
        .route("/api/v1/calendar/export", post(calendar::handle_export))
        .route(
            "/api/v1/calendar/days/:content_id/clipboard",
            get(calendar::handle_day_clipboard),
        )
        .with_state(state)
}
