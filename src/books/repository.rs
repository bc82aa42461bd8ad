pub mod http_book_repository;
pub mod memory_book_repository;
#[cfg(test)]
pub(crate) mod stub_backend;

use async_trait::async_trait;
use crate::books::dto::{Book, BookFormData, HealthStatus};
use crate::core::library::LibraryResult;

// BookRepository is the client's view of the book collection; every failure
// surfaces as a request error and nothing is retried
#[async_trait]
pub trait BookRepository: Sync + Send {
    // full collection, newest first
    async fn list_books(&self) -> LibraryResult<Vec<Book>>;

    // records whose title or author match the query
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<Book>>;

    // creates a record from the staged form and returns the stored book
    async fn create_book(&self, form: &BookFormData) -> LibraryResult<Book>;

    // removes a record by id
    async fn delete_book(&self, id: &str) -> LibraryResult<()>;

    // backend liveness probe
    async fn health(&self) -> LibraryResult<HealthStatus>;
}
