use std::sync::Arc;
use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::http_book_repository::HttpBookRepository;
use crate::books::repository::memory_book_repository::InMemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    match config.store {
        RepositoryStore::Http => {
            let base_url = config.base_url()?;
            info!("using book backend at {}", base_url);
            Ok(Arc::new(HttpBookRepository::build(base_url.as_str())?))
        }
        RepositoryStore::InMemory => {
            info!("using in-memory book store");
            Ok(Arc::new(InMemoryBookRepository::new()))
        }
    }
}
