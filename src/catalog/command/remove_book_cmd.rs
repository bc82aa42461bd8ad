use std::sync::Arc;
use async_trait::async_trait;
use crate::books::repository::BookRepository;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct RemoveBookCommand {
    book_repository: Arc<dyn BookRepository>,
}

impl RemoveBookCommand {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> LibraryResult<RemoveBookCommandResponse> {
        self.book_repository.delete_book(req.book_id.as_str()).await
            .map(|_| RemoveBookCommandResponse::new())
    }
}
