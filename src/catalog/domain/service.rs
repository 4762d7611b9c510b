use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
    page_size: usize,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
            page_size: config.page_size,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", book.id().as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<usize> {
        let removed = self.book_repository.delete(isbn).await?;
        // a zero-match removal is a silent no-op, so no event either
        if removed > 0 {
            let data = isbn.to_string();
            let _ = self.events_publisher.publish(&DomainEvent::deleted(
                "books", isbn, &HashMap::new(), &data)?).await?;
        }
        Ok(removed)
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.find_by_title(title).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let mut books = vec![];
        let mut page = None;
        loop {
            let res = self.book_repository.query(
                &HashMap::new(), page.as_deref(), self.page_size).await?;
            books.extend(res.records.iter().map(BookDto::from));
            page = res.next_page;
            if page.is_none() {
                break;
            }
        }
        Ok(books)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
            kind: other.kind,
            created_at: other.created_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
            kind: other.kind,
            created_at: other.created_at,
        }
    }
}
