//! Axum route handlers for reading, filtering and exporting the live calendar.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::clipboard::{content_id, day_clipboard_text, find_day};
use crate::calendar::csv_export::{csv_file_name, encode_csv, CSV_CONTENT_TYPE};
use crate::calendar::filter::{
    filter_indexed, filter_schedule, ContentFilter, IndexedWeek, ALL_SELECTOR,
};
use crate::errors::AppError;
use crate::generation::session::GeneratedSchedule;
use crate::models::schedule::{ContentSchedule, ContentType, Day};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde(rename = "type", default)]
    pub filter: ContentFilter,
}

/// A day as shown in a (possibly filtered) view. `content_id` always refers
/// to the day's position in the unfiltered week, so it stays valid for the
/// clipboard endpoint whatever filter produced the view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub content_id: String,
    #[serde(flatten)]
    pub day: Day,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub week_number: u32,
    pub days: Vec<DayView>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleView {
    pub niche: String,
    pub weeks: Vec<WeekView>,
}

impl ScheduleView {
    pub fn new(schedule: &ContentSchedule, filter: &ContentFilter) -> Self {
        let weeks = filter_indexed(schedule, filter)
            .into_iter()
            .map(|IndexedWeek { week_number, days }| WeekView {
                week_number,
                days: days
                    .into_iter()
                    .map(|(index, day)| DayView {
                        content_id: content_id(week_number, index),
                        day: day.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            niche: schedule.niche.clone(),
            weeks,
        }
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub schedule: ScheduleView,
    pub filter: ContentFilter,
    pub total_days: usize,
    pub shown_days: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub schedule: ContentSchedule,
    #[serde(rename = "type", default)]
    pub filter: ContentFilter,
}

#[derive(Debug, Serialize)]
pub struct ContentTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContentTypesResponse {
    pub options: Vec<ContentTypeOption>,
}

async fn require_current(state: &AppState) -> Result<GeneratedSchedule, AppError> {
    state
        .session
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No content calendar has been generated yet".to_string()))
}

/// GET /api/v1/calendar/content-types
///
/// Selector options: the `all` sentinel followed by every known content type.
pub async fn handle_content_types() -> Json<ContentTypesResponse> {
    let options = std::iter::once(ContentTypeOption {
        value: ALL_SELECTOR,
        label: "All Content Types",
    })
    .chain(ContentType::ALL.iter().map(|t| ContentTypeOption {
        value: t.as_str(),
        label: t.label(),
    }))
    .collect();

    Json(ContentTypesResponse { options })
}

/// GET /api/v1/calendar?type=<selector>
pub async fn handle_get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let current = require_current(&state).await?;
    if let ContentFilter::ContentType(selector) = &query.filter {
        if ContentType::from_value(selector).is_none() {
            debug!(selector = %selector, "Selector is not a known content type");
        }
    }
    let view = ScheduleView::new(&current.schedule, &query.filter);
    debug!(
        filter = query.filter.as_str(),
        weeks = view.weeks.len(),
        "Filtered calendar"
    );

    Ok(Json(CalendarResponse {
        total_days: current.schedule.day_count(),
        shown_days: view.day_count(),
        schedule: view,
        filter: query.filter,
        generated_at: current.generated_at,
    }))
}

/// POST /api/v1/calendar/filter
///
/// Stateless filter of a schedule supplied in the request body.
pub async fn handle_filter(Json(request): Json<FilterRequest>) -> Json<ContentSchedule> {
    Json(filter_schedule(&request.schedule, &request.filter))
}

/// GET /api/v1/calendar/export.csv
///
/// Always exports the full schedule, regardless of any filter in use.
pub async fn handle_export_current(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let current = require_current(&state).await?;
    csv_download(&current.schedule)
}

/// POST /api/v1/calendar/export
///
/// Stateless export of a schedule supplied in the request body.
pub async fn handle_export(
    Json(schedule): Json<ContentSchedule>,
) -> Result<impl IntoResponse, AppError> {
    csv_download(&schedule)
}

/// GET /api/v1/calendar/days/:content_id/clipboard
pub async fn handle_day_clipboard(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = require_current(&state).await?;
    let (_, day) = find_day(&current.schedule, &content_id)
        .ok_or_else(|| AppError::NotFound(format!("Day {content_id} not found")))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        day_clipboard_text(day),
    ))
}

fn csv_download(schedule: &ContentSchedule) -> Result<impl IntoResponse, AppError> {
    let body = encode_csv(schedule)?;
    let disposition = attachment_disposition(&csv_file_name(&schedule.niche));

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Quotes and backslashes would end the quoted filename early.
fn attachment_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && !c.is_control())
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_disposition_strips_quotes() {
        assert_eq!(
            attachment_disposition("say-\"hi\"-content-calendar.csv"),
            "attachment; filename=\"say-hi-content-calendar.csv\""
        );
    }

    fn week(week_number: u32, types: &[&str]) -> crate::models::schedule::Week {
        crate::models::schedule::Week {
            week_number,
            days: types
                .iter()
                .map(|t| Day {
                    content_type: t.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_schedule_view_ids_use_unfiltered_positions() {
        let schedule = ContentSchedule {
            niche: "Bikes".to_string(),
            weeks: vec![
                week(1, &["Educational", "Trending Topic", "Trending Topic"]),
                week(3, &["Trending Topic"]),
            ],
        };
        let view = ScheduleView::new(&schedule, &ContentFilter::from("Trending Topic"));
        let ids: Vec<&str> = view
            .weeks
            .iter()
            .flat_map(|w| w.days.iter().map(|d| d.content_id.as_str()))
            .collect();
        assert_eq!(ids, vec!["week1-day1", "week1-day2", "week3-day0"]);
        assert_eq!(view.day_count(), 3);
    }

    #[test]
    fn test_schedule_view_all_keeps_empty_weeks() {
        let schedule = ContentSchedule {
            niche: String::new(),
            weeks: vec![week(1, &[]), week(2, &["Educational"])],
        };
        let view = ScheduleView::new(&schedule, &ContentFilter::All);
        assert_eq!(view.weeks.len(), 2);
        assert!(view.weeks[0].days.is_empty());
    }

    #[test]
    fn test_day_view_flattens_day_fields() {
        let view = DayView {
            content_id: "week1-day0".to_string(),
            day: Day {
                overall_idea: "Idea".to_string(),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["contentId"], "week1-day0");
        assert_eq!(value["overallIdea"], "Idea");
    }

    #[test]
    fn test_query_defaults_to_all() {
        let q: CalendarQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.filter, ContentFilter::All);
    }
}
