pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // first record whose title matches case-insensitively, in insertion order
    async fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>>;
}
