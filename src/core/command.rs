use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Command runs a single user-triggered call against the book backend
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> LibraryResult<Response>;
}
