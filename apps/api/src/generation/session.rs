//! Holds the single live schedule.
//!
//! Readers get an `Arc` snapshot and never block a replacement for longer
//! than the pointer swap. A failed generation never reaches `install`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::schedule::ContentSchedule;

#[derive(Debug, Clone)]
pub struct GeneratedSchedule {
    pub schedule: Arc<ContentSchedule>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CalendarSession {
    current: Arc<RwLock<Option<GeneratedSchedule>>>,
}

impl CalendarSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live schedule and returns the installed snapshot.
    pub async fn install(&self, schedule: ContentSchedule) -> GeneratedSchedule {
        let generated = GeneratedSchedule {
            schedule: Arc::new(schedule),
            generated_at: Utc::now(),
        };
        *self.current.write().await = Some(generated.clone());
        generated
    }

    pub async fn current(&self) -> Option<GeneratedSchedule> {
        self.current.read().await.clone()
    }
}
