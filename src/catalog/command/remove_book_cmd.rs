use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

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
    pub(crate) book_id: BookId,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: format!("Book '{}' deleted successfully", book.title()),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref CMDS : AsyncOnce<(AddBookCommand, GetBookCommand, RemoveBookCommand)> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
                (AddBookCommand::new(svc.clone()), GetBookCommand::new(svc.clone()), RemoveBookCommand::new(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let (add_cmd, get_cmd, remove_cmd) = CMDS.get().await.clone();

        let res = add_cmd.execute(AddBookCommandRequest::new("Emma", "Austen", "isbn"))
            .await.expect("should add book");
        let removed = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.id)).await.expect("should remove book");
        assert_eq!("Book 'Emma' deleted successfully", removed.message.as_str());
        assert!(matches!(get_cmd.execute(GetBookCommandRequest::new(res.book.id)).await, Err(CommandError::NotFound { .. })));
        assert!(matches!(remove_cmd.execute(RemoveBookCommandRequest::new(res.book.id)).await, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_not_reuse_removed_id() {
        let (add_cmd, _, remove_cmd) = CMDS.get().await.clone();

        let first = add_cmd.execute(AddBookCommandRequest::new("a", "b", "c")).await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(first.book.id)).await.expect("should remove book");
        let second = add_cmd.execute(AddBookCommandRequest::new("a", "b", "c")).await.expect("should add book");
        assert!(second.book.id > first.book.id);
    }
}
