use std::sync::Arc;

use crate::generation::generator::ScheduleGenerator;
use crate::generation::quota::GenerationQuota;
use crate::generation::session::CalendarSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Production: `LlmScheduleGenerator`.
    pub generator: Arc<dyn ScheduleGenerator>,
    /// At most one live schedule.
    pub session: CalendarSession,
    pub quota: GenerationQuota,
}

impl AppState {
    pub fn new(generation_limit: u32, generator: Arc<dyn ScheduleGenerator>) -> Self {
        Self {
            generator,
            session: CalendarSession::new(),
            quota: GenerationQuota::new(generation_limit),
        }
    }
}
