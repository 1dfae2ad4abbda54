use std::sync::Arc;

use claimwise::embedding::TextEmbedder;
use claimwise::engine::RetrievalEngine;

/// Shared handler state: one engine for the process, never mutated after
/// initialization.
pub struct HandlerState<E: TextEmbedder + 'static> {
    pub engine: Arc<RetrievalEngine<E>>,
}

impl<E: TextEmbedder> HandlerState<E> {
    pub fn new(engine: Arc<RetrievalEngine<E>>) -> Self {
        Self { engine }
    }
}

// Manual impl: the derived one would require E: Clone, but only the Arc is
// cloned.
impl<E: TextEmbedder> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
