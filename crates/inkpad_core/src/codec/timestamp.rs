//! Creation stamp rendering and parsing.
//!
//! # Responsibility
//! - Pin the one textual stamp format embedded in page files (RFC 2822).
//! - Parse persisted stamp text back into a comparable instant.
//! - Render the human-facing listing projection of a parsed stamp.
//!
//! # Invariants
//! - `parse_stamp(format_stamp(t))` recovers `t` to second resolution.
//! - Parsing is total: unrecognized text yields `None`, never a panic or a
//!   propagated error.

use chrono::{DateTime, FixedOffset, Utc};

/// Renders a stamp in the fixed on-disk format.
///
/// RFC 2822 text (`Thu, 7 Aug 2026 12:30:00 +0000`) is both human-readable
/// in the raw file and machine-parseable for listing order.
pub fn format_stamp(stamp: DateTime<Utc>) -> String {
    stamp.to_rfc2822()
}

/// Parses stamp text in the fixed on-disk format.
///
/// Returns `None` for text that does not match; listing code treats such
/// entries as unorderable rather than dropping them.
pub fn parse_stamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text.trim()).ok()
}

/// Renders the listing projection of a parsed stamp.
pub fn display_stamp(stamp: DateTime<FixedOffset>) -> String {
    stamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::{display_stamp, format_stamp, parse_stamp};
    use chrono::{TimeZone, Utc};

    #[test]
    fn stamp_round_trips_at_second_resolution() {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 7, 9, 15, 42).unwrap();
        let text = format_stamp(stamp);
        let parsed = parse_stamp(&text).expect("rendered stamp should parse");
        assert_eq!(parsed.timestamp(), stamp.timestamp());
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let stamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let text = format!("  {}  ", format_stamp(stamp));
        assert!(parse_stamp(&text).is_some());
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(parse_stamp("2026-08-07 09:15:42").is_none());
        assert!(parse_stamp("last tuesday").is_none());
        assert!(parse_stamp("").is_none());
    }

    #[test]
    fn display_uses_compact_layout() {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 7, 9, 5, 3).unwrap();
        let parsed = parse_stamp(&format_stamp(stamp)).unwrap();
        assert_eq!(display_stamp(parsed), "2026-08-07 09:05:03");
    }
}
