use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

// MemBookRepository keeps every record in one Vec so insertion order is the
// iteration order. The lock only satisfies the Sync + Send repository bounds.
#[derive(Debug, Default)]
pub struct MemBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }

    fn read_store(&self) -> LibraryResult<RwLockReadGuard<'_, Vec<BookEntity>>> {
        self.books.read().map_err(|_| LibraryError::runtime("books lock poisoned", None))
    }

    fn write_store(&self) -> LibraryResult<RwLockWriteGuard<'_, Vec<BookEntity>>> {
        self.books.write().map_err(|_| LibraryError::runtime("books lock poisoned", None))
    }
}

fn matches_predicate(book: &BookEntity, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (k, v) in predicate {
        let matched = match k.as_str() {
            "isbn" => book.isbn == *v,
            "title" => book.title == *v,
            "author" => book.author == *v,
            "available" => book.available.to_string() == *v,
            _ => {
                return Err(LibraryError::validation(
                    format!("unknown book attribute {}", k).as_str(), None));
            }
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.write_store()?;
        books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.read_store()?;
        books.iter().find(|b| b.isbn == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.write_store()?;
        let before = books.len();
        books.retain(|b| b.isbn != id);
        Ok(before - books.len())
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let offset = match page {
            Some(token) => token.parse::<usize>().map_err(|_| LibraryError::validation(
                format!("invalid page token {}", token).as_str(), None))?,
            None => 0,
        };
        let books = self.read_store()?;
        let mut matched = vec![];
        for book in books.iter() {
            if matches_predicate(book, predicate)? {
                matched.push(book.clone());
            }
        }
        let next_page = if offset + page_size < matched.len() {
            Some((offset + page_size).to_string())
        } else {
            None
        };
        let records = matched.into_iter().skip(offset).take(page_size).collect();
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>> {
        let needle = title.to_lowercase();
        let books = self.read_store()?;
        Ok(books.iter().find(|b| b.title.to_lowercase() == needle).cloned())
    }
}
