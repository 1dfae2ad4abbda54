use serde::Serialize;

use crate::corpus::CorpusDocument;
use crate::records::DenialRecord;

/// Response header carrying the answer source, set by the HTTP gateway.
pub const CLAIMWISE_SOURCE_HEADER: &str = "X-Claimwise-Source";

/// Message returned while the semantic path cannot answer.
pub const NOT_READY_MESSAGE: &str = "I'm still warming up.";

/// Engine operability, fixed at initialization for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// Records loaded and the index built: both answer paths work.
    Ready,
    /// Records loaded but no index: direct lookup only.
    Degraded,
    /// No table loaded: nothing can answer.
    Unavailable,
}

impl Readiness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Ready => "ready",
            Readiness::Degraded => "degraded",
            Readiness::Unavailable => "unavailable",
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced (or failed to produce) the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    DirectLookup,
    SemanticSearch,
    None,
}

impl AnswerSource {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            AnswerSource::DirectLookup => "direct_lookup",
            AnswerSource::SemanticSearch => "semantic_search",
            AnswerSource::None => "none",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_header_value())
    }
}

/// Exact answer from the denial table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectAnswer {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: String,
    pub action: String,
}

impl DirectAnswer {
    pub fn from_denial(row: &DenialRecord) -> Self {
        Self {
            kind: "denial_explanation",
            description: row.description.clone(),
            action: row.suggested_action.clone(),
        }
    }
}

/// Approximate answer drawn from the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticAnswer {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub matched_source: &'static str,
    #[serde(skip)]
    pub score: f32,
    #[serde(skip)]
    pub position: usize,
}

impl SemanticAnswer {
    pub fn from_document(document: &CorpusDocument, score: f32, position: usize) -> Self {
        Self {
            message: document.text.clone(),
            kind: "semantic_help",
            matched_source: document.key.source_kind(),
            score,
            position,
        }
    }
}

/// The response union serialized into the `response` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Direct(DirectAnswer),
    Semantic(SemanticAnswer),
    Message(String),
}

/// One answer per query, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub success: bool,
    pub response: QueryResponse,
    pub source: AnswerSource,
}

impl QueryResult {
    pub fn direct(row: &DenialRecord) -> Self {
        Self {
            success: true,
            response: QueryResponse::Direct(DirectAnswer::from_denial(row)),
            source: AnswerSource::DirectLookup,
        }
    }

    pub fn semantic(document: &CorpusDocument, score: f32, position: usize) -> Self {
        Self {
            success: true,
            response: QueryResponse::Semantic(SemanticAnswer::from_document(
                document, score, position,
            )),
            source: AnswerSource::SemanticSearch,
        }
    }

    /// Soft failure: the semantic path cannot answer yet. Not an error.
    pub fn not_ready() -> Self {
        Self {
            success: false,
            response: QueryResponse::Message(NOT_READY_MESSAGE.to_string()),
            source: AnswerSource::None,
        }
    }
}
