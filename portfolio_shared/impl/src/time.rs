use chrono::{DateTime, Utc};
use portfolio_shared_contracts::time::TimeService;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
