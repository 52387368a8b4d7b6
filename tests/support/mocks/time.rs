// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use vecinal_core::application::ports::time::Clock;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp used as the creation time of seeded users.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// One hour after `fixed_now()`, so updates are always later than seeds.
    pub fn later() -> Self {
        Self(fixed_now() + Duration::hours(1))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
