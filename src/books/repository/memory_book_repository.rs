use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::books::dto::{Book, BookFormData, HealthStatus, NewBookRequest};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

// InMemoryBookRepository keeps the collection in process with the same
// observable behavior as the REST backend
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    // newest first
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn insert(&self, req: &NewBookRequest) -> LibraryResult<Book> {
        if req.title.trim().is_empty() || req.author.trim().is_empty() {
            return Err(LibraryError::validation("Title and author are required"));
        }
        let now = Utc::now().to_rfc3339();
        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: req.title.to_string(),
            author: req.author.to_string(),
            description: req.description.to_string(),
            publication_year: req.publication_year,
            isbn: req.isbn.clone(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.books().insert(0, book.clone());
        Ok(book)
    }

    pub(crate) fn find(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.books().iter()
            .filter(|b| b.title.to_lowercase().contains(needle.as_str())
                || b.author.to_lowercase().contains(needle.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) fn remove(&self, id: &str) -> LibraryResult<()> {
        let mut books = self.books();
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(LibraryError::not_found(format!("book not found for {}", id).as_str()));
        }
        Ok(())
    }
}

// callers of the repository only ever see request failures, as they would
// from the HTTP backend
fn as_request_error(err: LibraryError) -> LibraryError {
    LibraryError::request(err.to_string().as_str(), err.status())
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_books(&self) -> LibraryResult<Vec<Book>> {
        Ok(self.books().clone())
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<Book>> {
        Ok(self.find(query))
    }

    async fn create_book(&self, form: &BookFormData) -> LibraryResult<Book> {
        self.insert(&NewBookRequest::from(form)).map_err(as_request_error)
    }

    async fn delete_book(&self, id: &str) -> LibraryResult<()> {
        self.remove(id).map_err(as_request_error)
    }

    async fn health(&self) -> LibraryResult<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: "book-library-memory".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{BookFormData, NewBookRequest};
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::InMemoryBookRepository;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_list_books_newest_first() {
        let repo = InMemoryBookRepository::new();
        let first = repo.create_book(&BookFormData::new("Dune", "Frank Herbert")).await.expect("should create book");
        let second = repo.create_book(&BookFormData::new("Emma", "Jane Austen")).await.expect("should create book");
        assert_ne!(first.id, second.id);

        let books = repo.list_books().await.expect("should list books");
        assert_eq!(vec![second, first], books);
    }

    #[tokio::test]
    async fn test_should_search_title_or_author_ignoring_case() {
        let repo = InMemoryBookRepository::new();
        let _ = repo.create_book(&BookFormData::new("Dune", "Frank Herbert")).await.expect("should create book");
        let _ = repo.create_book(&BookFormData::new("Emma", "Jane Austen")).await.expect("should create book");

        assert_eq!(1, repo.search_books("dUN").await.expect("should search").len());
        assert_eq!(1, repo.search_books("austen").await.expect("should search").len());
        assert_eq!(0, repo.search_books("tolstoy").await.expect("should search").len());
        assert_eq!(2, repo.search_books("").await.expect("should search").len());
    }

    #[tokio::test]
    async fn test_should_require_title_and_author() {
        let repo = InMemoryBookRepository::new();
        let res = repo.create_book(&BookFormData::new("Dune", " ")).await;
        assert!(matches!(res, Err(LibraryError::Request { status: Some(400), .. })));
        assert!(repo.list_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_direct_insert_without_title() {
        let repo = InMemoryBookRepository::new();
        let res = repo.insert(&NewBookRequest::from(&BookFormData::new("", "Jane Austen")));
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(matches!(repo.remove("nope"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_delete_books() {
        let repo = InMemoryBookRepository::new();
        let book = repo.create_book(&BookFormData::new("Dune", "Frank Herbert")).await.expect("should create book");
        repo.delete_book(book.id.as_str()).await.expect("should delete book");
        assert!(repo.list_books().await.expect("should list books").is_empty());
        assert!(matches!(repo.delete_book(book.id.as_str()).await, Err(LibraryError::Request { status: Some(404), .. })));
    }
}
