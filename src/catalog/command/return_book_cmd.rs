use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

pub(crate) struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) book_id: BookId,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub message: String,
    pub returned_by: String,
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new((book, returned_by): (BookDto, String)) -> Self {
        Self {
            message: format!("Book '{}' returned successfully by {}", book.title(), returned_by),
            returned_by,
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id)
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
