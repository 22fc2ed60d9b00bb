//! Timestamp parsing and locale rewriting for server-rendered text.
//!
//! # Design
//! - Parsing is pure and target-independent; rendering is delegated to a [`TimeFormatter`].
//! - Marker spans (`$$$<timestamp>$$$`) are rewritten independently; a span that
//!   fails to parse keeps its inner text with the delimiters stripped.

use crate::core::error::{UiError, UiResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// Pattern matching one delimited timestamp span.
pub const MARKER_PATTERN: &str = r"\$\$\$([\s0-9:+.\-TZ]+)\$\$\$";

/// Display format used by the native formatters.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A parsed timestamp.
///
/// Date-times without an offset are wall-clock readings in the viewer's zone;
/// everything else, bare dates included, names an absolute instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// Absolute point in time.
    Instant(DateTime<Utc>),
    /// Wall-clock reading resolved in the viewer's zone.
    Wall(NaiveDateTime),
}

/// Renders a timestamp for display in the viewer's locale.
pub trait TimeFormatter {
    /// Locale rendering of `timestamp`.
    fn format(&self, timestamp: Timestamp) -> String;
}

/// Formatter using the host's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFormatter;

impl TimeFormatter for LocalFormatter {
    fn format(&self, timestamp: Timestamp) -> String {
        match timestamp {
            Timestamp::Instant(instant) => instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            Timestamp::Wall(wall) => wall.format(DISPLAY_FORMAT).to_string(),
        }
    }
}

/// Formatter pinned to a fixed offset, which also stands in as the viewer's zone.
#[derive(Clone, Copy, Debug)]
pub struct OffsetFormatter {
    offset: FixedOffset,
}

impl OffsetFormatter {
    /// Formatter rendering in `offset`.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl TimeFormatter for OffsetFormatter {
    fn format(&self, timestamp: Timestamp) -> String {
        match timestamp {
            Timestamp::Instant(instant) => instant
                .with_timezone(&self.offset)
                .format(DISPLAY_FORMAT)
                .to_string(),
            Timestamp::Wall(wall) => wall.format(DISPLAY_FORMAT).to_string(),
        }
    }
}

/// Parse a server-rendered timestamp.
///
/// Accepts RFC 3339, ISO with an offset (seconds optional), naive date-times
/// (wall clock in the viewer's zone), and bare dates (midnight UTC).
///
/// # Errors
///
/// Returns [`UiError::TimestampParse`] when no accepted form matches.
pub fn parse_timestamp(input: &str) -> UiResult<Timestamp> {
    let trimmed = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Timestamp::Instant(parsed.with_timezone(&Utc)));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Ok(Timestamp::Instant(parsed.with_timezone(&Utc)));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Timestamp::Wall(parsed));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(Timestamp::Instant(midnight.and_utc()));
    }
    Err(UiError::TimestampParse {
        input: trimmed.to_string(),
    })
}

/// Rewrite the text content of a raw-timestamp element.
///
/// # Errors
///
/// Returns [`UiError::TimestampParse`] when the text is not a timestamp; the
/// caller keeps the original text.
pub fn localize_text(text: &str, formatter: &impl TimeFormatter) -> UiResult<String> {
    parse_timestamp(text).map(|timestamp| formatter.format(timestamp))
}

/// Result of rewriting the marker spans of one attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerRewrite {
    /// Attribute value with every span replaced.
    pub text: String,
    /// Inner text of spans that failed to parse.
    pub failures: Vec<String>,
}

/// Compiled marker pattern.
#[derive(Clone, Debug)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Compile [`MARKER_PATTERN`].
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Pattern`] if the pattern fails to compile.
    pub fn new() -> UiResult<Self> {
        Regex::new(MARKER_PATTERN)
            .map(|regex| Self { regex })
            .map_err(|source| UiError::Pattern { source })
    }

    /// Replace every `$$$<timestamp>$$$` span in `value`.
    #[must_use]
    pub fn localize(&self, value: &str, formatter: &impl TimeFormatter) -> MarkerRewrite {
        let mut text = String::with_capacity(value.len());
        let mut failures = Vec::new();
        let mut last = 0;
        for captures in self.regex.captures_iter(value) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            text.push_str(&value[last..whole.start()]);
            match localize_text(inner.as_str(), formatter) {
                Ok(rendered) => text.push_str(&rendered),
                Err(_) => {
                    text.push_str(inner.as_str());
                    failures.push(inner.as_str().to_string());
                }
            }
            last = whole.end();
        }
        text.push_str(&value[last..]);
        MarkerRewrite { text, failures }
    }

    /// Whether `value` contains at least one span.
    #[must_use]
    pub fn has_markers(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> OffsetFormatter {
        OffsetFormatter::new(FixedOffset::east_opt(0).unwrap())
    }

    fn reference() -> Timestamp {
        Timestamp::Instant(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    }

    fn wall(hour: u32, minute: u32) -> Timestamp {
        Timestamp::Wall(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
    }

    #[test]
    fn parses_accepted_forms() {
        for input in [
            "2024-01-15T10:30:00Z",
            " 2024-01-15T11:30:00+01:00 ",
            "2024-01-15 10:30:00+00:00",
            "2024-01-15 10:30:00.000000+00:00",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), reference(), "{input}");
        }
        assert_eq!(
            parse_timestamp("2024-01-15").unwrap(),
            Timestamp::Instant(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn minute_precision_offsets_are_instants() {
        for input in [
            "2024-01-15T10:30Z",
            "2024-01-15T11:30+01:00",
            "2024-01-15 10:30+00:00",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), reference(), "{input}");
        }
        let pattern = MarkerPattern::new().unwrap();
        let rewrite = pattern.localize("Created $$$2024-01-15T10:30Z$$$ by admin", &utc());
        assert_eq!(rewrite.text, "Created 2024-01-15 10:30:00 by admin");
        assert!(rewrite.failures.is_empty());
    }

    #[test]
    fn offsetless_date_times_are_wall_clock() {
        for input in [
            "2024-01-15T10:30:00",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30",
            "2024-01-15 10:30",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), wall(10, 30), "{input}");
        }
        let berlin = OffsetFormatter::new(FixedOffset::east_opt(3600).unwrap());
        assert_eq!(
            localize_text("2024-01-15T10:30:00", &berlin).unwrap(),
            "2024-01-15 10:30:00"
        );
        assert_eq!(
            localize_text("2024-01-15T10:30:00", &LocalFormatter).unwrap(),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("None"),
            Err(UiError::TimestampParse { input }) if input == "None"
        ));
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn localized_text_differs_and_round_trips() {
        let berlin = OffsetFormatter::new(FixedOffset::east_opt(3600).unwrap());
        let raw = "2024-01-15T10:30:00Z";
        let rendered = localize_text(raw, &berlin).unwrap();
        assert!(!rendered.is_empty());
        assert_ne!(rendered, raw);
        let back = NaiveDateTime::parse_from_str(&rendered, DISPLAY_FORMAT).unwrap();
        let instant = back
            .and_local_timezone(FixedOffset::east_opt(3600).unwrap())
            .unwrap();
        assert_eq!(Timestamp::Instant(instant.with_timezone(&Utc)), reference());
    }

    #[test]
    fn local_formatter_round_trips() {
        let rendered = localize_text("2024-01-15T10:30:00Z", &LocalFormatter).unwrap();
        let back = NaiveDateTime::parse_from_str(&rendered, DISPLAY_FORMAT).unwrap();
        let instant = back.and_local_timezone(Local).earliest().unwrap();
        assert_eq!(Timestamp::Instant(instant.with_timezone(&Utc)), reference());
    }

    #[test]
    fn marker_rewrite_keeps_surrounding_text() {
        let pattern = MarkerPattern::new().unwrap();
        let rewrite = pattern.localize("Created $$$2024-01-15T10:30:00Z$$$ by admin", &utc());
        assert_eq!(rewrite.text, "Created 2024-01-15 10:30:00 by admin");
        assert!(rewrite.text.starts_with("Created "));
        assert!(rewrite.text.ends_with(" by admin"));
        assert!(rewrite.failures.is_empty());
    }

    #[test]
    fn multiple_spans_are_all_rewritten() {
        let pattern = MarkerPattern::new().unwrap();
        let rewrite = pattern.localize(
            "Last updated $$$2024-01-15 10:30:00+00:00$$$ \nLast changed $$$2024-01-14T08:00:00Z$$$",
            &utc(),
        );
        assert_eq!(
            rewrite.text,
            "Last updated 2024-01-15 10:30:00 \nLast changed 2024-01-14 08:00:00"
        );
    }

    #[test]
    fn failed_span_keeps_inner_text() {
        let pattern = MarkerPattern::new().unwrap();
        let rewrite = pattern.localize("a $$$99-99$$$ b $$$2024-01-15T10:30:00Z$$$", &utc());
        assert_eq!(rewrite.text, "a 99-99 b 2024-01-15 10:30:00");
        assert_eq!(rewrite.failures, vec!["99-99".to_string()]);
    }

    #[test]
    fn value_without_markers_is_unchanged() {
        let pattern = MarkerPattern::new().unwrap();
        assert!(!pattern.has_markers("plain title"));
        let rewrite = pattern.localize("plain title", &utc());
        assert_eq!(rewrite.text, "plain title");
    }
}
