//! Content-type filter over a schedule.
//!
//! Matching is exact and case-sensitive. Weeks left without days are dropped,
//! and surviving weeks keep their original `week_number` (gaps are expected).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::schedule::{ContentSchedule, Day, Week};

/// Sentinel selector meaning "no filtering".
pub const ALL_SELECTOR: &str = "all";

/// Parsed form of the selector string sent by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentFilter {
    #[default]
    All,
    /// Any other selector. Not checked against the known content types:
    /// an unknown value simply matches nothing.
    ContentType(String),
}

impl ContentFilter {
    pub fn matches(&self, content_type: &str) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::ContentType(wanted) => wanted == content_type,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContentFilter::All => ALL_SELECTOR,
            ContentFilter::ContentType(t) => t,
        }
    }
}

impl From<&str> for ContentFilter {
    fn from(selector: &str) -> Self {
        if selector == ALL_SELECTOR {
            ContentFilter::All
        } else {
            ContentFilter::ContentType(selector.to_string())
        }
    }
}

impl Serialize for ContentFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        Ok(ContentFilter::from(selector.as_str()))
    }
}

/// A surviving week, with each day paired with its zero-based position in
/// the unfiltered week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedWeek<'a> {
    pub week_number: u32,
    pub days: Vec<(usize, &'a Day)>,
}

/// Same selection as [`filter_schedule`], borrowing the days and keeping
/// their original positions so callers can address them afterwards.
/// With [`ContentFilter::All`] every week is kept, even an empty one.
pub fn filter_indexed<'a>(
    schedule: &'a ContentSchedule,
    filter: &ContentFilter,
) -> Vec<IndexedWeek<'a>> {
    schedule
        .weeks
        .iter()
        .filter_map(|week| {
            let days: Vec<_> = week
                .days
                .iter()
                .enumerate()
                .filter(|(_, day)| filter.matches(&day.content_type))
                .collect();

            (*filter == ContentFilter::All || !days.is_empty()).then(|| IndexedWeek {
                week_number: week.week_number,
                days,
            })
        })
        .collect()
}

/// Returns the subset of `schedule` whose days match `filter`.
pub fn filter_schedule(schedule: &ContentSchedule, filter: &ContentFilter) -> ContentSchedule {
    if *filter == ContentFilter::All {
        return schedule.clone();
    }

    let weeks = filter_indexed(schedule, filter)
        .into_iter()
        .map(|week| Week {
            week_number: week.week_number,
            days: week.days.into_iter().map(|(_, day)| day.clone()).collect(),
        })
        .collect();

    ContentSchedule {
        niche: schedule.niche.clone(),
        weeks,
    }
}
