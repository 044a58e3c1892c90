//! Conditionally relative date formatting
//!
//! Recent timestamps are shown relative to now ("now", "5 min", "3 hours
//! ago"); older ones as a weekday, a month and day, or a full date. Both
//! kinds follow the translator's locale.

use chrono::{DateTime, Duration, Locale, TimeZone, Utc};
use i18n::Translator;
use std::fmt;

const SIX_DAYS: i64 = 6;
const YEAR_DAYS: i64 = 364;

/// Calendar names and field order for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarPatterns {
    locale: Locale,
    weekday: &'static str,
    month_day: &'static str,
    full_date: &'static str,
}

impl CalendarPatterns {
    fn for_language(language: &str) -> Self {
        match language {
            "de" => Self { locale: Locale::de_DE, weekday: "%a", month_day: "%-d. %b", full_date: "%-d. %b %Y" },
            _ => Self { locale: Locale::en_US, weekday: "%a", month_day: "%b %-d", full_date: "%b %-d, %Y" },
        }
    }
}

/// Formats timestamps for list rows and headers
#[derive(Debug)]
pub struct DateFormatter {
    translator: Translator,
    calendar: CalendarPatterns,
}

impl DateFormatter {
    /// Create a formatter for the translator's locale
    pub fn new(translator: Translator) -> Self {
        let calendar = CalendarPatterns::for_language(translator.locale().language.as_str());
        Self { translator, calendar }
    }

    /// Format a timestamp relative to the current time
    ///
    /// See [`DateFormatter::conditionally_relative_time_span_since`].
    pub fn conditionally_relative_time_span<Tz>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.conditionally_relative_time_span_since(timestamp, Utc::now())
    }

    /// Format a timestamp relative to `now`
    ///
    /// - under a minute (or in the future): "now"
    /// - under an hour: whole minutes
    /// - under a day: whole hours
    /// - up to six days: short weekday
    /// - up to 364 days: month and day
    /// - older: month, day and year
    ///
    /// Calendar fields are rendered in the timestamp's own time zone.
    pub fn conditionally_relative_time_span_since<Tz>(&self, timestamp: &DateTime<Tz>, now: DateTime<Utc>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let span = now.signed_duration_since(timestamp.with_timezone(&Utc));

        if span < Duration::minutes(1) {
            self.translator.get("date-formatting-now")
        } else if span < Duration::hours(1) {
            self.translator.get_count("date-formatting-relative-minutes", span.num_minutes())
        } else if span < Duration::days(1) {
            self.translator.get_count("date-formatting-relative-hours", span.num_hours())
        } else if span <= Duration::days(SIX_DAYS) {
            self.calendar_field(timestamp, self.calendar.weekday)
        } else if span <= Duration::days(YEAR_DAYS) {
            self.calendar_field(timestamp, self.calendar.month_day)
        } else {
            self.calendar_field(timestamp, self.calendar.full_date)
        }
    }

    fn calendar_field<Tz>(&self, timestamp: &DateTime<Tz>, pattern: &str) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        timestamp.format_localized(pattern, self.calendar.locale).to_string()
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Translator::default())
    }
}
