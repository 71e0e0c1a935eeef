//! Clock overlay text and the time source abstraction.
//!
//! The controller never reads the system clock directly; it goes through
//! [`TimeSource`] so tests can pin the current instant. Formatting is
//! locale-aware and honors the configured display timezone, falling back to
//! host-local time.

use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use chrono_tz::Tz;

/// Source of the current instant.
pub trait TimeSource: Send + Sync {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time source backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formatted text for the clock overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockText {
    /// Time line, without seconds (e.g. "14:30")
    pub time: String,
    /// Date line with weekday (e.g. "Friday, May 3, 2024")
    pub date: String,
}

/// Format the clock overlay text for an instant.
///
/// The instant is converted to `tz` when given, host-local time otherwise,
/// then rendered with `locale`'s weekday and month names.
pub fn clock_text(now: DateTime<Utc>, tz: Option<Tz>, locale: Locale) -> ClockText {
    match tz {
        Some(tz) => format_in(now.with_timezone(&tz), locale),
        None => format_in(now.with_timezone(&Local), locale),
    }
}

fn format_in<T: TimeZone>(now: DateTime<T>, locale: Locale) -> ClockText
where
    T::Offset: std::fmt::Display,
{
    ClockText {
        time: now.format_localized("%H:%M", locale).to_string(),
        date: now.format_localized("%A, %B %-d, %Y", locale).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 3, h, m, s).unwrap()
    }

    #[test]
    fn test_clock_text_utc() {
        let text = clock_text(instant(14, 30, 7), Some(chrono_tz::UTC), Locale::en_US);
        assert_eq!(text.time, "14:30");
        assert_eq!(text.date, "Friday, May 3, 2024");
    }

    #[test]
    fn test_clock_text_configured_timezone() {
        let text = clock_text(
            instant(23, 30, 0),
            Some(chrono_tz::America::New_York),
            Locale::en_US,
        );
        // UTC-4 during daylight saving
        assert_eq!(text.time, "19:30");
        assert_eq!(text.date, "Friday, May 3, 2024");
    }

    #[test]
    fn test_clock_text_crosses_date_line() {
        let text = clock_text(
            instant(23, 30, 0),
            Some(chrono_tz::Asia::Tokyo),
            Locale::en_US,
        );
        assert_eq!(text.time, "08:30");
        assert_eq!(text.date, "Saturday, May 4, 2024");
    }

    #[test]
    fn test_clock_text_host_local_is_usable() {
        let text = clock_text(instant(12, 0, 0), None, Locale::en_US);
        assert!(!text.time.is_empty());
        assert!(!text.date.is_empty());
    }

    #[test]
    fn test_system_time_source_advances() {
        let source = SystemTimeSource;
        assert!(source.now() > instant(0, 0, 0));
    }
}
