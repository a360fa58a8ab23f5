//! Page blob layout and the two decode paths.
//!
//! # Responsibility
//! - Produce the exact byte sequence persisted for a page: title heading,
//!   body, then one trailing stamp line.
//! - Decode a blob back into body and stamp text by locating the stamp
//!   sentinel line, not by guessing at markdown structure.
//! - Offer a line-oriented stamp-only scan for listing, which never needs
//!   the body.
//!
//! # Invariants
//! - Layout is fixed: `# <title>\n\n<body>\n\n*Created on: <stamp>*`.
//! - A blob with no title line, no stamp line, or a stamp line that is not
//!   after the title line decodes to empty fields; decoding has no error
//!   path.
//! - The full decode keeps the `Created on:` label in its stamp text;
//!   callers that parse the value strip it with `strip_stamp_label`.

use crate::codec::timestamp::format_stamp;
use chrono::{DateTime, Utc};

/// Label inside the stamp line, in front of the stamp value.
pub const STAMP_LABEL: &str = "Created on:";

/// Full line prefix of the stamp sentinel line.
const STAMP_LINE_PREFIX: &str = "*Created on:";

/// Fields recovered from a persisted page blob.
///
/// Both fields are empty when the blob lacks the expected structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPage {
    /// Body text with outer whitespace trimmed.
    pub body: String,
    /// Stamp text between the sentinel asterisks, label included.
    pub stamp_text: String,
}

/// Renders the blob persisted for one page.
///
/// This is a one-way transform applied exactly once per save; encoding an
/// already-encoded blob nests headings instead of replacing them.
pub fn encode_page(title: &str, body: &str, stamp: DateTime<Utc>) -> String {
    format!(
        "# {title}\n\n{body}\n\n{STAMP_LINE_PREFIX} {}*",
        format_stamp(stamp)
    )
}

/// Recovers body and stamp text from a persisted blob.
///
/// The blob is split on two sentinels: the first newline ends the title
/// line, and the last well-formed stamp line ends the body. Anything
/// between them, outer whitespace trimmed, is the body; bodies may freely
/// contain `#`, `*` and further newlines. Malformed blobs decode to empty
/// fields.
pub fn decode_page(blob: &str) -> DecodedPage {
    let Some(newline) = blob.find('\n') else {
        return DecodedPage::default();
    };

    let tail = &blob[newline + 1..];
    let Some(footer_start) = last_stamp_line_offset(tail) else {
        return DecodedPage::default();
    };

    let body = tail[..footer_start].trim().to_string();
    let footer = tail[footer_start..].lines().next().unwrap_or("").trim();
    let inner = footer
        .strip_prefix('*')
        .and_then(|rest| rest.strip_suffix('*'))
        .unwrap_or("");

    DecodedPage {
        body,
        stamp_text: inner.trim().to_string(),
    }
}

/// Scans a blob line by line for the stamp value alone.
///
/// Used by listings, which never need the body. The first line carrying
/// the stamp prefix wins; its label and trailing asterisk are stripped,
/// and callers decide whether the remainder parses. Returns `None` when
/// no such line exists.
pub fn scan_stamp_line(blob: &str) -> Option<String> {
    for line in blob.lines() {
        if let Some(rest) = line.strip_prefix(STAMP_LINE_PREFIX) {
            let value = rest.trim();
            let value = value.strip_suffix('*').unwrap_or(value);
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Strips the `Created on:` label from full-decode stamp text.
pub fn strip_stamp_label(stamp_text: &str) -> &str {
    stamp_text
        .strip_prefix(STAMP_LABEL)
        .unwrap_or(stamp_text)
        .trim()
}

fn last_stamp_line_offset(tail: &str) -> Option<usize> {
    let mut offset = 0;
    let mut found = None;
    for line in tail.split_inclusive('\n') {
        if is_stamp_line(line.trim_end()) {
            found = Some(offset);
        }
        offset += line.len();
    }
    found
}

fn is_stamp_line(line: &str) -> bool {
    line.starts_with(STAMP_LINE_PREFIX) && line.ends_with('*') && line.len() > STAMP_LINE_PREFIX.len()
}

#[cfg(test)]
mod tests {
    use super::{decode_page, encode_page, scan_stamp_line, strip_stamp_label, DecodedPage};
    use crate::codec::timestamp::{format_stamp, parse_stamp};
    use chrono::{TimeZone, Utc};

    fn stamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap()
    }

    #[test]
    fn encode_produces_fixed_layout() {
        let blob = encode_page("Groceries", "milk\neggs", stamp());
        let expected = format!(
            "# Groceries\n\nmilk\neggs\n\n*Created on: {}*",
            format_stamp(stamp())
        );
        assert_eq!(blob, expected);
    }

    #[test]
    fn decode_round_trips_encoded_pages() {
        let blob = encode_page("Groceries", "milk\neggs", stamp());
        let decoded = decode_page(&blob);
        assert_eq!(decoded.body, "milk\neggs");

        let value = strip_stamp_label(&decoded.stamp_text);
        let parsed = parse_stamp(value).expect("stamp should parse");
        assert_eq!(parsed.timestamp(), stamp().timestamp());
    }

    #[test]
    fn decode_keeps_label_in_stamp_text() {
        let blob = encode_page("T", "body", stamp());
        let decoded = decode_page(&blob);
        assert!(decoded.stamp_text.starts_with("Created on:"));
    }

    #[test]
    fn decode_tolerates_asterisks_inside_body() {
        let blob = encode_page("T", "a *bold* claim\n*Created on: fake*\nmore", stamp());
        let decoded = decode_page(&blob);
        assert_eq!(decoded.body, "a *bold* claim\n*Created on: fake*\nmore");
        assert!(parse_stamp(strip_stamp_label(&decoded.stamp_text)).is_some());
    }

    #[test]
    fn decode_of_blob_without_stamp_line_is_empty() {
        assert_eq!(decode_page("# Title\n\njust a body"), DecodedPage::default());
        assert_eq!(decode_page("no markers at all"), DecodedPage::default());
    }

    #[test]
    fn decode_of_single_line_blob_is_empty() {
        assert_eq!(
            decode_page("# Title *Created on: something*"),
            DecodedPage::default()
        );
    }

    #[test]
    fn decode_requires_stamp_after_title_line() {
        // Stamp-looking text confined to the title line does not count.
        assert_eq!(
            decode_page("*Created on: early*\n"),
            DecodedPage::default()
        );
    }

    #[test]
    fn decode_accepts_empty_body_region() {
        let blob = format!("# T\n*Created on: {}*", format_stamp(stamp()));
        let decoded = decode_page(&blob);
        assert_eq!(decoded.body, "");
        assert!(parse_stamp(strip_stamp_label(&decoded.stamp_text)).is_some());
    }

    #[test]
    fn scan_returns_first_stamp_line() {
        let blob = "# T\n\n*Created on: not a real stamp*\n\n*Created on: later*";
        assert_eq!(scan_stamp_line(blob).as_deref(), Some("not a real stamp"));
    }

    #[test]
    fn scan_strips_prefix_and_trailing_asterisk() {
        let blob = encode_page("T", "body", stamp());
        let value = scan_stamp_line(&blob).expect("stamp line should exist");
        assert_eq!(value, format_stamp(stamp()));
        assert!(parse_stamp(&value).is_some());
    }

    #[test]
    fn scan_without_stamp_line_is_none() {
        assert_eq!(scan_stamp_line("# T\n\nbody only"), None);
    }

    #[test]
    fn strip_label_is_a_no_op_without_label() {
        assert_eq!(strip_stamp_label("  raw text "), "raw text");
    }
}
