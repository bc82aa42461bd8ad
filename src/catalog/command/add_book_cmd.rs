use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::{Book, BookFormData};
use crate::books::repository::BookRepository;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub(crate) struct AddBookCommand {
    book_repository: Arc<dyn BookRepository>,
}

impl AddBookCommand {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) form: BookFormData,
}

impl AddBookCommandRequest {
    pub fn new(form: BookFormData) -> Self {
        Self {
            form,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandResponse {
    pub book: Book,
}

impl AddBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> LibraryResult<AddBookCommandResponse> {
        self.book_repository.create_book(&req.form).await.map(AddBookCommandResponse::new)
    }
}
