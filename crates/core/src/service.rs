use crate::config::CatalogConfig;
use crate::notice::NoticeSink;
use crate::store::JsonStore;
use std::sync::Arc;

/// Catalog operations over the configured photo and album documents.
///
/// Lookups, formatting, edits and album listings are implemented on this type in their own
/// modules. Every call reads the documents afresh; nothing is cached between calls.
#[derive(Clone)]
pub struct CatalogService {
    store: JsonStore,
    notices: Arc<dyn NoticeSink>,
}

impl CatalogService {
    pub fn new(cfg: Arc<CatalogConfig>, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            store: JsonStore::new(cfg, notices.clone()),
            notices,
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub(crate) fn notices(&self) -> &dyn NoticeSink {
        self.notices.as_ref()
    }
}
