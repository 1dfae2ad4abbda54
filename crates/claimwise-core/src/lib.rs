//! Claimwise library crate (used by the server and integration tests).
//!
//! Hybrid retrieval over insurance claims knowledge: exact structured
//! lookups backed by an approximate semantic index, behind one engine that
//! decides which answer wins.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Service configuration
//! - [`RetrievalEngine`], [`QueryResult`], [`Readiness`] - The hybrid engine
//! - [`Tables`], [`DenialRecord`], [`MemberRecord`], [`PlanRecord`] - Record store
//!
//! ## Retrieval Pipeline
//! - [`Intent`], [`classify`] - Advisory query classification
//! - [`CodeRef`], [`extract_code`], [`find_denial`] - Direct lookup
//! - [`CorpusDocument`], [`build_corpus`] - Corpus projection
//! - [`VectorIndex`], [`SearchHit`] - Exhaustive similarity search
//!
//! ## Embedding
//! - [`TextEmbedder`] - The opaque embedding seam
//! - [`Embedder`] - Shipped backend (remote HTTP or deterministic hashed)

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod engine;
pub mod index;
pub mod intent;
pub mod lookup;
pub mod records;

pub use config::{Config, ConfigError, DEFAULT_EMBEDDING_MODEL};
pub use corpus::{CorpusDocument, DocKey, build_corpus};
pub use embedding::{DEFAULT_EMBEDDING_DIM, Embedder, EmbeddingError, TextEmbedder};
pub use engine::{
    AnswerSource, CLAIMWISE_SOURCE_HEADER, DirectAnswer, NOT_READY_MESSAGE, QueryError,
    QueryResponse, QueryResult, Readiness, RetrievalEngine, SemanticAnswer,
};
pub use index::{DEFAULT_TOP_K, IndexInitError, SearchHit, VectorIndex};
pub use intent::{Intent, classify};
pub use lookup::{CodeRef, extract_code, find_denial};
pub use records::{
    DENIAL_FILE, DataLoadError, DenialRecord, MEMBER_FILE, MemberRecord, PLAN_FILE, PlanRecord,
    Tables, load_denials, load_members, load_plans, load_tables,
};
