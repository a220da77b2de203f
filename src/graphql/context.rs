use std::sync::Arc;

use crate::movies::MovieCatalog;
use crate::store::Store;

/// Shared handles available to every resolver.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<Store>,
    pub movies: Arc<dyn MovieCatalog>,
}

impl GraphQLContext {
    pub fn new(store: Arc<Store>, movies: Arc<dyn MovieCatalog>) -> Self {
        Self { store, movies }
    }
}
