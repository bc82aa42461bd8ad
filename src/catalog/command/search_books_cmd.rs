use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::Book;
use crate::books::repository::BookRepository;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct SearchBooksCommand {
    book_repository: Arc<dyn BookRepository>,
}

impl SearchBooksCommand {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<Book>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> LibraryResult<SearchBooksCommandResponse> {
        self.book_repository.search_books(req.query.as_str()).await.map(SearchBooksCommandResponse::new)
    }
}
