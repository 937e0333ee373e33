//! Clock adapters.

use chrono::{Local, NaiveDateTime};
use scaffolder_core::application::ports::Clock;

/// Format of migration file name prefixes.
pub const MIGRATION_STAMP_FORMAT: &str = "%Y%m%d.%H%M%S";

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn migration_stamp(&self) -> String {
        Local::now().format(MIGRATION_STAMP_FORMAT).to_string()
    }
}

/// Clock frozen at one instant, for tests and reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Parse a `YYYYMMDD.HHMMSS` stamp.
    pub fn parse(stamp: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(stamp, MIGRATION_STAMP_FORMAT).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn migration_stamp(&self) -> String {
        self.at.format(MIGRATION_STAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_round_trips_stamp() {
        let clock = FixedClock::parse("20240131.235959").unwrap();
        assert_eq!(clock.migration_stamp(), "20240131.235959");
    }

    #[test]
    fn system_clock_shape() {
        let stamp = SystemClock.migration_stamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'.');
        assert!(FixedClock::parse(&stamp).is_ok());
    }

    #[test]
    fn bad_stamp_rejected() {
        assert!(FixedClock::parse("yesterday").is_err());
    }
}
