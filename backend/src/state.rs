use std::sync::{Arc, PoisonError, RwLock};

use vsm_search::{Config, SearchIndex, SearchStats};

/// Shared server state. The index is an immutable snapshot; re-indexing
/// builds a complete replacement and swaps the pointer.
pub struct AppState {
    config: Config,
    index: RwLock<Arc<SearchIndex>>,
}

impl AppState {
    pub fn new(config: Config, index: SearchIndex) -> Self {
        Self {
            config,
            index: RwLock::new(Arc::new(index)),
        }
    }

    pub fn load(config: Config) -> vsm_search::Result<Self> {
        let index = config.load_index()?;
        Ok(Self::new(config, index))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current snapshot. Holds the lock only long enough to clone the `Arc`.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn replace(&self, index: SearchIndex) -> SearchStats {
        let stats = index.stats();
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(index);
        tracing::info!(
            documents = stats.document_count,
            vocabulary = stats.vocabulary_size,
            "swapped search index"
        );
        stats
    }
}
