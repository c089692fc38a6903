use chrono::{DateTime, Utc};

/// Clock port so cache freshness can be tested without real time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
