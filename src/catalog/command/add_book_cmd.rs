use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookKind, LibraryError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) available: bool,
    pub(crate) kind: BookKind,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, available: bool, kind: BookKind) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available,
            kind,
        }
    }

    // Builds the request from raw prompt answers. A file size answer selects
    // the electronic kind; its absence selects the base kind. Malformed
    // bool/int text is a parse failure fatal to the operation.
    pub fn parse(title: &str, author: &str, isbn: &str,
                 available: &str, file_size: Option<&str>) -> Result<Self, CommandError> {
        let available = available.trim().to_lowercase().parse::<bool>()
            .map_err(LibraryError::from).map_err(CommandError::from)?;
        let kind = match file_size {
            Some(raw) => BookKind::Electronic {
                file_size_mb: raw.trim().parse::<u64>()
                    .map_err(LibraryError::from).map_err(CommandError::from)?,
            },
            None => BookKind::Paper,
        };
        Ok(Self::new(title, author, isbn, available, kind))
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(),
                     self.available, self.kind)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(|_| AddBookCommandResponse::new(book))
    }
}
