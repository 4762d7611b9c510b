use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub removed: usize,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::BookKind;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC : AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.get().await.clone());
        let remove_cmd = RemoveBookCommand::new(SUT_SVC.get().await.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "removable book", "test author", "isbn_remove", true, BookKind::Paper))
            .await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "removable copy", "test author", "isbn_remove", true, BookKind::Paper))
            .await.expect("should add book");

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn_remove".to_string()))
            .await.expect("should remove book");
        assert_eq!(2, res.removed);
    }

    #[tokio::test]
    async fn test_should_run_remove_book_for_missing_isbn() {
        let remove_cmd = RemoveBookCommand::new(SUT_SVC.get().await.clone());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("isbn_never_added".to_string()))
            .await.expect("should remove nothing");
        assert_eq!(0, res.removed);
    }
}
