use std::sync::Arc;
use tracing::{info, warn};
use crate::books::factory;
use crate::books::repository::BookRepository;
use crate::catalog::controller::CatalogController;
use crate::catalog::view::RenderOptions;
use crate::core::controller::AppState;
use crate::core::library::LibraryResult;

pub(crate) fn create_catalog_controller(state: &AppState) -> LibraryResult<CatalogController> {
    let book_repo = factory::create_book_repository(&state.config)?;
    Ok(build_catalog_controller(state, book_repo))
}

pub(crate) fn build_catalog_controller(state: &AppState, book_repo: Arc<dyn BookRepository>) -> CatalogController {
    let options = RenderOptions { description_preview: state.config.description_preview };
    CatalogController::new(book_repo, options)
}

// probes the backend once; an unreachable backend is reported, not fatal
pub(crate) async fn check_backend(book_repo: &dyn BookRepository) -> bool {
    match book_repo.health().await {
        Ok(health) => {
            info!("backend {} is {}", health.service, health.status);
            true
        }
        Err(err) => {
            warn!("backend health check failed {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::{BookFormData, NewBookRequest};
    use crate::books::repository::http_book_repository::HttpBookRepository;
    use crate::books::repository::memory_book_repository::InMemoryBookRepository;
    use crate::books::repository::stub_backend::StubBackend;
    use crate::catalog::factory::{build_catalog_controller, check_backend, create_catalog_controller};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_controller() {
        let config = Configuration::new("/api", RepositoryStore::InMemory);
        let ctrl = create_catalog_controller(&AppState::new(config)).expect("should create controller");
        ctrl.load_books().await;
        assert!(!ctrl.snapshot().loading);
        assert!(ctrl.snapshot().books.is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_for_unusable_backend_url() {
        let config = Configuration::new("mailto:books@example.com", RepositoryStore::Http);
        assert!(create_catalog_controller(&AppState::new(config)).is_err());
    }

    #[tokio::test]
    async fn test_should_apply_description_preview() {
        let mut config = Configuration::new("/api", RepositoryStore::InMemory);
        config.description_preview = 12;
        let repo = Arc::new(InMemoryBookRepository::new());
        let mut form = BookFormData::new("Dune", "Frank Herbert");
        form.description = "A desert planet and the spice it hides".to_string();
        let _ = repo.insert(&NewBookRequest::from(&form)).expect("should insert");

        let ctrl = build_catalog_controller(&AppState::new(config), repo);
        ctrl.load_books().await;
        let description = ctrl.render().cards()[0].description.clone().expect("should have description");
        assert_eq!(12, description.chars().count());
    }

    #[tokio::test]
    async fn test_should_check_backend() {
        assert!(check_backend(&InMemoryBookRepository::new()).await);

        let backend = StubBackend::start_failing().await;
        let repo = HttpBookRepository::build(backend.base_url()).expect("should build client");
        assert!(!check_backend(&repo).await);
    }
}
