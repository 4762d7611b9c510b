use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::BookKind;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub kind: BookKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, available: bool, kind: BookKind) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            available,
            kind,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookDto {
    // The capitalized True/False spelling is part of the wire format.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, ISBN: {}, Available: {}",
               self.title, self.author, self.isbn,
               if self.available { "True" } else { "False" })?;
        if let Some(file_size_mb) = self.kind.file_size_mb() {
            write!(f, ", File Size: {} MB", file_size_mb)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::library::BookKind;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", "author", true, BookKind::Paper);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_format_paper_books() {
        let book = BookDto::new("111", "Moby Dick", "Melville", false, BookKind::Paper);
        assert_eq!("Title: Moby Dick, Author: Melville, ISBN: 111, Available: False",
                   book.to_string());
    }

    #[tokio::test]
    async fn test_should_format_electronic_books() {
        let book = BookDto::new("123", "Dune", "Herbert", true, BookKind::Electronic { file_size_mb: 5 });
        assert_eq!("Title: Dune, Author: Herbert, ISBN: 123, Available: True, File Size: 5 MB",
                   book.to_string());
    }
}
