// Prompt constants for content schedule generation.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const SCHEDULE_SYSTEM_ROLE: &str = "You are an expert social media strategist \
    who plans practical, on-brand content calendars for small businesses.";

pub fn schedule_system_prompt() -> String {
    format!("{SCHEDULE_SYSTEM_ROLE} {JSON_ONLY_SYSTEM}")
}

/// Replace: {niche}, {business_description}, {target_audience},
///          {content_goals}, {unique_value}, {content_types}
pub const SCHEDULE_PROMPT_TEMPLATE: &str = r#"Create a 4-week content calendar for the business below.

NICHE: {niche}
BUSINESS DESCRIPTION: {business_description}
TARGET AUDIENCE: {target_audience}
CONTENT GOALS: {content_goals}
UNIQUE VALUE: {unique_value}

Return a JSON object with this EXACT schema (no extra fields):
{
  "niche": "{niche}",
  "weeks": [
    {
      "weekNumber": 1,
      "days": [
        {
          "day": "Monday",
          "overallIdea": "One-sentence description of the post",
          "contentType": "Educational",
          "talkingPoints": ["Point one", "Point two", "Point three"],
          "hooks": ["Opening line that stops the scroll", "Alternative hook"],
          "additionalNotes": "Format, visuals or call-to-action guidance"
        }
      ]
    }
  ]
}

RULES:
1. Exactly 4 weeks, numbered 1 to 4 in ascending order
2. 3 to 5 posting days per week, in the order they should be published
3. `contentType` MUST be exactly one of: {content_types}
4. 2 to 4 talking points and 1 to 3 hooks per day
5. Ground every idea in the business description and audience above; no generic filler
6. Use an empty string for `additionalNotes` when there is nothing to add"#;
