pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    // removes every record sharing the isbn, returns the count removed
    async fn remove_book(&self, isbn: &str) -> LibraryResult<usize>;
    // case-insensitive first match; a miss is a normal outcome, not an error
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<Option<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
}
