use std::sync::Arc;

use crate::config::SeedData;
use crate::errors::LibraryResult;
use crate::services::{AuthorService, CatalogService};
use crate::store::Store;

/// Shared application context exposing core services for the GraphQL and CLI layers.
///
/// Owns the store for the lifetime of the process; services hold handles to it.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<Store>,
    catalog_service: Arc<CatalogService>,
    author_service: Arc<AuthorService>,
}

impl AppContext {
    pub fn new(store: Store) -> Self {
        let store = Arc::new(store);
        let catalog_service = Arc::new(CatalogService::new(store.clone()));
        let author_service = Arc::new(AuthorService::new(store.clone()));

        Self {
            store,
            catalog_service,
            author_service,
        }
    }

    pub fn with_seed(seed: SeedData) -> LibraryResult<Self> {
        Ok(Self::new(Store::with_seed(seed.authors, seed.books)?))
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn catalog_service(&self) -> &CatalogService {
        &self.catalog_service
    }

    pub fn author_service(&self) -> &AuthorService {
        &self.author_service
    }
}
