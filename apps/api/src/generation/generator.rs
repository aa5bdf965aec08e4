//! Schedule generation — turns a business brief into a `ContentSchedule`.
//!
//! `AppState` carries an `Arc<dyn ScheduleGenerator>`; the LLM-backed
//! implementation is used in production and tests substitute a stub.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{schedule_system_prompt, SCHEDULE_PROMPT_TEMPLATE};
use crate::llm_client::LlmClient;
use crate::models::brief::BusinessBrief;
use crate::models::schedule::{ContentSchedule, ContentType};

#[async_trait]
pub trait ScheduleGenerator: Send + Sync {
    async fn generate(&self, brief: &BusinessBrief) -> Result<ContentSchedule, AppError>;
}

pub struct LlmScheduleGenerator {
    llm: LlmClient,
}

impl LlmScheduleGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScheduleGenerator for LlmScheduleGenerator {
    async fn generate(&self, brief: &BusinessBrief) -> Result<ContentSchedule, AppError> {
        let prompt = render_schedule_prompt(brief);
        let raw: ContentSchedule = self
            .llm
            .complete_json(&prompt, &schedule_system_prompt())
            .await?;

        let schedule = finalize_schedule(raw, brief)?;
        info!(
            niche = %schedule.niche,
            weeks = schedule.weeks.len(),
            days = schedule.day_count(),
            "Generated content schedule"
        );
        Ok(schedule)
    }
}

pub fn render_schedule_prompt(brief: &BusinessBrief) -> String {
    let content_types = ContentType::ALL
        .iter()
        .map(|t| format!("\"{}\"", t.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    SCHEDULE_PROMPT_TEMPLATE
        .replace("{niche}", &brief.niche)
        .replace("{business_description}", &brief.business_description)
        .replace("{target_audience}", or_unspecified(&brief.target_audience))
        .replace("{content_goals}", or_unspecified(&brief.content_goals))
        .replace("{unique_value}", or_unspecified(&brief.unique_value))
        .replace("{content_types}", &content_types)
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not specified)"
    } else {
        value
    }
}

/// The niche always comes from the brief, whatever the model echoed back.
fn finalize_schedule(
    mut schedule: ContentSchedule,
    brief: &BusinessBrief,
) -> Result<ContentSchedule, AppError> {
    schedule.niche = brief.niche.trim().to_string();
    schedule.validate()?;
    Ok(schedule)
}
