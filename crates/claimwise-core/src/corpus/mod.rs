//! Corpus Builder: deterministic projection of structured records into
//! searchable text documents.
//!
//! Order is load-bearing: the vector index joins back to documents by
//! position, so documents are emitted denials-first then plans, each in
//! table iteration order.


use serde::Serialize;

use crate::records::Tables;

/// Provenance key for a corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DocKey {
    DenialReason {
        user_code: String,
        denial_code: String,
    },
    PlanCoverage {
        plan_id: String,
    },
}

impl DocKey {
    /// Source table name, matching the ingestion file stems.
    pub fn source_kind(&self) -> &'static str {
        match self {
            DocKey::DenialReason { .. } => "denial_reason",
            DocKey::PlanCoverage { .. } => "plan_coverage",
        }
    }
}

/// A searchable text document with provenance back to its source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusDocument {
    pub text: String,
    pub key: DocKey,
}

/// Projects the loaded tables into an ordered corpus.
///
/// Pure and deterministic: the same tables always yield the same documents
/// in the same order. Absent or empty tables contribute nothing.
pub fn build_corpus(tables: &Tables) -> Vec<CorpusDocument> {
    let mut corpus = Vec::new();

    for row in tables.denials() {
        corpus.push(CorpusDocument {
            text: format!(
                "Denial {}{}: {}",
                row.user_code, row.denial_code, row.description
            ),
            key: DocKey::DenialReason {
                user_code: row.user_code.clone(),
                denial_code: row.denial_code.clone(),
            },
        });
    }

    for row in tables.plans() {
        corpus.push(CorpusDocument {
            text: format!(
                "Plan {} covers {} with {} copay.",
                row.plan_id, row.covered_services, row.copay
            ),
            key: DocKey::PlanCoverage {
                plan_id: row.plan_id.clone(),
            },
        });
    }

    corpus
}
