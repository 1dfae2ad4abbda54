//! Rule-based intent classification.
//!
//! The classified intent is advisory: it informs callers and logging but
//! never gates the direct-lookup path, which runs on every query.

use serde::Serialize;

/// Coarse subject area of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Denial,
    Member,
    Plan,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Denial => "denial",
            Intent::Member => "member",
            Intent::Plan => "plan",
            Intent::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DENIAL_KEYWORDS: &[&str] = &["denial", "reject", "rejected", "denied", "co-", "pr-"];
const MEMBER_KEYWORDS: &[&str] = &["member", "patient", "subscriber"];
const PLAN_KEYWORDS: &[&str] = &["plan", "coverage", "covered", "benefit"];

/// Classifies a query, preferring an explicit caller hint.
///
/// A recognized hint wins outright. Otherwise the lowercased query is
/// checked against fixed keyword sets in priority order denial > member >
/// plan; the first set with any match wins, else [`Intent::General`].
pub fn classify(query: &str, hint: Option<&str>) -> Intent {
    if let Some(hint) = hint {
        match hint.trim().to_lowercase().as_str() {
            "denial" | "denial_code" => return Intent::Denial,
            "member" | "member_lookup" => return Intent::Member,
            "plan" | "coverage" | "plan_coverage" => return Intent::Plan,
            // Unrecognized hints fall through to keyword matching.
            _ => {}
        }
    }

    let lowered = query.to_lowercase();

    if DENIAL_KEYWORDS.iter().any(|w| lowered.contains(w)) {
        Intent::Denial
    } else if MEMBER_KEYWORDS.iter().any(|w| lowered.contains(w)) {
        Intent::Member
    } else if PLAN_KEYWORDS.iter().any(|w| lowered.contains(w)) {
        Intent::Plan
    } else {
        Intent::General
    }
}
