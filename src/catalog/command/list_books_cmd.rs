use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::Book;
use crate::books::repository::BookRepository;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct ListBooksCommand {
    book_repository: Arc<dyn BookRepository>,
}

impl ListBooksCommand {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<Book>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> LibraryResult<ListBooksCommandResponse> {
        self.book_repository.list_books().await.map(ListBooksCommandResponse::new)
    }
}
