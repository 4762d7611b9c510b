use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

// Every command of a session shares this one service instance.
pub(crate) async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Arc::new(CatalogServiceImpl::new(config, book_repo, publisher))
}
