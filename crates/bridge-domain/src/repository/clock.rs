//! Clock - Where "now" comes from
//!
//! The domain never reads the system time itself.

use crate::model::mission::Timestamp;

/// Source of ISO-8601 timestamps
pub trait Clock {
    fn now(&self) -> Timestamp;
}
