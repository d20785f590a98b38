//! Clock adapters

use bridge_domain::{Clock, Timestamp};
use chrono::{DateTime, SecondsFormat, Utc};

/// Wall-clock time in UTC, RFC 3339 with millisecond precision
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Parse a stored timestamp back into a chrono instant
pub fn parse_timestamp(ts: &Timestamp) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts.as_str())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
