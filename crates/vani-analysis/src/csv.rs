//! CSV serialization of the analysis row table.
//!
//! This is the one user-facing persisted output, so the format is
//! pinned: UTF-8, comma-delimited, header row, one line per
//! [`AnalysisRow`] in pipeline-emission order, RFC 4180 quoting.

use std::borrow::Cow;

use vani_core::AnalysisRow;

const HEADER: &str = "original,normalized,translated,sentiment";

/// Serializes rows to a CSV document.
#[must_use]
pub fn rows_to_csv(rows: &[AnalysisRow]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&escape_field(&row.original));
        out.push(',');
        out.push_str(&escape_field(&row.normalized));
        out.push(',');
        out.push_str(&escape_field(&row.translated));
        out.push(',');
        out.push_str(row.sentiment.as_str());
        out.push('\n');
    }
    out
}

/// Quotes a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
