//! Hybrid Retrieval Engine: the one externally-invoked surface of the core.
//!
//! A query is classified (advisory), attempted against the direct-lookup
//! path, and only on a miss resolved via the vector index. Direct lookup
//! always wins when both paths could answer.
//!
//! The engine is built once before serving and is read-only afterward:
//! queries take `&self` and run concurrently without locks.

pub mod error;
pub mod types;


pub use error::QueryError;
pub use types::{
    AnswerSource, CLAIMWISE_SOURCE_HEADER, DirectAnswer, NOT_READY_MESSAGE, QueryResponse,
    QueryResult, Readiness, SemanticAnswer,
};

use tracing::{debug, error, info};

use crate::corpus::{self, CorpusDocument};
use crate::embedding::{EmbeddingError, TextEmbedder};
use crate::index::{DEFAULT_TOP_K, VectorIndex};
use crate::intent;
use crate::lookup;
use crate::records::Tables;

/// The hybrid retrieval engine. Immutable after [`RetrievalEngine::initialize`].
pub struct RetrievalEngine<E> {
    tables: Tables,
    corpus: Vec<CorpusDocument>,
    index: Option<VectorIndex>,
    embedder: E,
    top_k: usize,
    readiness: Readiness,
}

impl<E: TextEmbedder> RetrievalEngine<E> {
    /// Builds the corpus and vector index over the loaded tables.
    ///
    /// Initialization never fails outright: a missing record store yields an
    /// [`Readiness::Unavailable`] engine and an index build failure yields a
    /// [`Readiness::Degraded`] one. Both still serve direct lookups where
    /// possible. `top_k` of zero falls back to the default width.
    pub async fn initialize(tables: Tables, embedder: E, top_k: usize) -> Self {
        let top_k = if top_k == 0 { DEFAULT_TOP_K } else { top_k };

        if tables.all_failed() {
            error!("no table loaded, engine is unavailable");
            return Self {
                tables,
                corpus: vec![],
                index: None,
                embedder,
                top_k,
                readiness: Readiness::Unavailable,
            };
        }

        let corpus = corpus::build_corpus(&tables);
        let texts: Vec<String> = corpus.iter().map(|d| d.text.clone()).collect();

        let (index, readiness) = match VectorIndex::build(&texts, &embedder).await {
            Ok(index) => {
                info!(
                    documents = index.len(),
                    dim = index.dim(),
                    model = embedder.model_id(),
                    "retrieval engine ready"
                );
                (Some(index), Readiness::Ready)
            }
            Err(e) => {
                error!(error = %e, "index build failed, engine degraded to direct lookup only");
                (None, Readiness::Degraded)
            }
        };

        Self {
            tables,
            corpus,
            index,
            embedder,
            top_k,
            readiness,
        }
    }

    /// Engine operability for the health surface.
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// The loaded record tables.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// The embedder behind the semantic path.
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Number of corpus documents (zero when unavailable).
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Answers one query.
    ///
    /// Protocol: reject empty text, try direct lookup on the raw text
    /// (regardless of the classified intent), then fall back to semantic
    /// search when the engine is ready. A semantic path that cannot answer
    /// returns the soft not-ready result rather than an error.
    pub async fn query(
        &self,
        text: &str,
        type_hint: Option<&str>,
    ) -> Result<QueryResult, QueryError> {
        if text.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        // Advisory only: logged for routing diagnostics, never gates the
        // lookup below.
        let intent = intent::classify(text, type_hint);
        debug!(%intent, "classified query");

        if let Some(code) = lookup::extract_code(text) {
            if let Some(row) = lookup::find_denial(self.tables.denials(), &code) {
                info!(
                    user_code = %code.user_code,
                    denial_code = %code.denial_code,
                    "direct lookup hit"
                );
                return Ok(QueryResult::direct(row));
            }
            debug!(
                user_code = %code.user_code,
                denial_code = %code.denial_code,
                "extracted code has no matching denial row"
            );
        }

        let Some(index) = &self.index else {
            debug!(readiness = %self.readiness, "semantic path unavailable");
            return Ok(QueryResult::not_ready());
        };

        let embedding = self.embedder.embed(text).await?;
        if embedding.len() != index.dim() {
            return Err(QueryError::Embedding(EmbeddingError::DimensionMismatch {
                expected: index.dim(),
                actual: embedding.len(),
            }));
        }

        let hits = index.search(&embedding, self.top_k);

        // Only the best hit is surfaced; the rest of the top-k stays here
        // for future ranking extensions.
        match hits.first() {
            Some(best) => {
                let document = &self.corpus[best.position];
                debug!(
                    position = best.position,
                    score = best.score,
                    source = document.key.source_kind(),
                    "semantic best match"
                );
                Ok(QueryResult::semantic(document, best.score, best.position))
            }
            None => Ok(QueryResult::not_ready()),
        }
    }
}
