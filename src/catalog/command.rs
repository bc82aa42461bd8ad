pub mod add_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod search_books_cmd;
