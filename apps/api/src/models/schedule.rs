//! Content schedule data model — the shape the generation backend must deliver.
//!
//! The schedule is produced once per successful generation and never mutated
//! afterwards. Filtering and export always build new values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The full generated content plan, organized into weeks of days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSchedule {
    /// Subject label. Only used to name derived artifacts.
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    /// Publishing order, not necessarily calendar order.
    #[serde(default)]
    pub days: Vec<Day>,
}

/// One planned piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Day {
    pub day: String,
    pub overall_idea: String,
    /// Opaque for filtering purposes; see [`ContentType`] for the known values.
    pub content_type: String,
    pub talking_points: Vec<String>,
    pub hooks: Vec<String>,
    pub additional_notes: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("week number must be positive (week at position {position})")]
    ZeroWeekNumber { position: usize },

    #[error("week numbers must be strictly ascending: {previous} is followed by {next}")]
    WeekOrder { previous: u32, next: u32 },
}

impl ContentSchedule {
    /// Total number of day entries across all weeks.
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    /// Checks the structural invariants the rest of the service relies on:
    /// week numbers are positive, unique and ascending.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let mut previous: Option<u32> = None;

        for (position, week) in self.weeks.iter().enumerate() {
            if week.week_number == 0 {
                return Err(ScheduleError::ZeroWeekNumber { position });
            }
            if let Some(prev) = previous {
                if week.week_number <= prev {
                    return Err(ScheduleError::WeekOrder {
                        previous: prev,
                        next: week.week_number,
                    });
                }
            }
            previous = Some(week.week_number);
        }

        Ok(())
    }
}

/// Content categories the generator is asked to use.
///
/// Days carry the category as a plain string so that unexpected values from
/// the backend survive untouched; this enum only describes the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Educational,
    BehindTheScenes,
    TipsAndTricks,
    IndustryInsights,
    TrendingTopic,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Educational,
        ContentType::BehindTheScenes,
        ContentType::TipsAndTricks,
        ContentType::IndustryInsights,
        ContentType::TrendingTopic,
    ];

    /// Exact string stored in `Day::content_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Educational => "Educational",
            ContentType::BehindTheScenes => "Behind-the-Scenes",
            ContentType::TipsAndTricks => "Tips & Tricks",
            ContentType::IndustryInsights => "Industry Insights",
            ContentType::TrendingTopic => "Trending Topic",
        }
    }

    /// Human label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Educational => "Educational",
            ContentType::BehindTheScenes => "Behind the Scenes",
            ContentType::TipsAndTricks => "Tips & Tricks",
            ContentType::IndustryInsights => "Industry Insights",
            ContentType::TrendingTopic => "Trending Topics",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}
