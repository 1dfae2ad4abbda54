//! Direct Lookup Engine: pattern extraction plus exact denial-table match.
//!
//! Both functions are pure and free of shared state, so the lookup path is
//! unit-testable without a record store or index behind it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::records::DenialRecord;

// 1-2 letter group code, optional hyphen, 1-3 digit reason code
// (e.g. "co-123", "pr45"). Matching runs over the lowercased query.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z]{1,2})-?([0-9]{1,3})").expect("denial code pattern is valid")
});

/// A denial code reference extracted from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRef {
    pub user_code: String,
    pub denial_code: String,
}

/// Extracts the first denial code reference from a query, if any.
///
/// The letter group is uppercased to match stored `user_code` values; the
/// digit group is kept verbatim so it compares exactly against the stored
/// text representation (no zero-padding is added or stripped).
pub fn extract_code(query: &str) -> Option<CodeRef> {
    let lowered = query.to_lowercase();
    let caps = CODE_PATTERN.captures(&lowered)?;

    Some(CodeRef {
        user_code: caps[1].to_uppercase(),
        denial_code: caps[2].to_string(),
    })
}

/// Finds the first denial row matching both code fields exactly.
///
/// Source data does not guarantee `(user_code, denial_code)` uniqueness;
/// when several rows match, the first in table order wins.
pub fn find_denial<'a>(denials: &'a [DenialRecord], code: &CodeRef) -> Option<&'a DenialRecord> {
    denials
        .iter()
        .find(|row| row.user_code == code.user_code && row.denial_code == code.denial_code)
}
