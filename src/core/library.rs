use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Parse {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn parse(message: &str) -> LibraryError {
        LibraryError::Parse { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<std::str::ParseBoolError> for LibraryError {
    fn from(err: std::str::ParseBoolError) -> Self {
        LibraryError::parse(
            format!("bool parsing {:?}", err).as_str())
    }
}

impl From<std::num::ParseIntError> for LibraryError {
    fn from(err: std::num::ParseIntError) -> Self {
        LibraryError::parse(
            format!("int parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Parse { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

// BookKind is a closed set of catalog record kinds where the electronic
// variant carries its download size in megabytes.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookKind {
    Paper,
    Electronic { file_size_mb: u64 },
}

impl BookKind {
    pub fn file_size_mb(&self) -> Option<u64> {
        match self {
            BookKind::Paper => None,
            BookKind::Electronic { file_size_mb } => Some(*file_size_mb),
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Paper => write!(f, "Book"),
            BookKind::Electronic { .. } => write!(f, "EBook"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookKind, LibraryError};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_parse_error() {
        assert!(matches!(LibraryError::parse("test"), LibraryError::Parse{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_bool_parse_error() {
        let err = "yes".parse::<bool>().map_err(LibraryError::from).expect_err("should fail parsing");
        assert!(matches!(err, LibraryError::Parse{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_int_parse_error() {
        let err = "five".parse::<u64>().map_err(LibraryError::from).expect_err("should fail parsing");
        assert!(matches!(err, LibraryError::Parse{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_book_kind() {
        assert_eq!("Book", BookKind::Paper.to_string());
        assert_eq!("EBook", BookKind::Electronic { file_size_mb: 5 }.to_string());
    }

    #[tokio::test]
    async fn test_should_expose_file_size_for_electronic_kind() {
        assert_eq!(None, BookKind::Paper.file_size_mb());
        assert_eq!(Some(5), BookKind::Electronic { file_size_mb: 5 }.file_size_mb());
    }
}
