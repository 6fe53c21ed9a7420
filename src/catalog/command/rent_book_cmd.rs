use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

pub(crate) struct RentBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RentBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id comes from the path; only rented_by is read from the body and an
// absent name is left for the domain to reject.
#[derive(Debug, Deserialize)]
pub(crate) struct RentBookCommandRequest {
    #[serde(skip)]
    pub(crate) book_id: BookId,
    #[serde(default)]
    pub(crate) rented_by: String,
}

impl RentBookCommandRequest {
    pub fn new(book_id: BookId, rented_by: &str) -> Self {
        Self {
            book_id,
            rented_by: rented_by.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RentBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl RentBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: format!("Book '{}' rented successfully to {}",
                             book.title(), book.renter().unwrap_or_default()),
            book,
        }
    }
}

#[async_trait]
impl Command<RentBookCommandRequest, RentBookCommandResponse> for RentBookCommand {
    async fn execute(&self, req: RentBookCommandRequest) -> Result<RentBookCommandResponse, CommandError> {
        self.catalog_service.rent_book(req.book_id, req.rented_by.as_str())
            .await.map_err(CommandError::from).map(RentBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::rent_book_cmd::{RentBookCommand, RentBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::date::today;

    async fn build_commands() -> (AddBookCommand, RentBookCommand) {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        (AddBookCommand::new(svc.clone()), RentBookCommand::new(svc))
    }

    #[tokio::test]
    async fn test_should_run_rent_book() {
        let (add_cmd, rent_cmd) = build_commands().await;
        let _ = add_cmd.execute(AddBookCommandRequest::new("1984", "Orwell", "X")).await.expect("should add book");

        let res = rent_cmd.execute(RentBookCommandRequest::new(1, " Alice ")).await.expect("should rent book");
        assert_eq!("Book '1984' rented successfully to Alice", res.message.as_str());
        assert_eq!(Some(today()), res.book.rent_date);

        let err = rent_cmd.execute(RentBookCommandRequest::new(1, "Bob")).await.expect_err("already rented");
        assert!(matches!(err, CommandError::AlreadyRented { ref rented_by, .. } if rented_by == "Alice"));
        assert_eq!("Book is already rented by Alice", err.message());
    }

    #[tokio::test]
    async fn test_should_reject_missing_renter() {
        let (add_cmd, rent_cmd) = build_commands().await;
        let _ = add_cmd.execute(AddBookCommandRequest::new("1984", "Orwell", "X")).await.expect("should add book");

        let mut req: RentBookCommandRequest = serde_json::from_str("{}").expect("should parse");
        req.book_id = 1;
        let err = rent_cmd.execute(req).await.expect_err("renter missing");
        assert_eq!("Renter name is required", err.message());
        assert!(matches!(rent_cmd.execute(RentBookCommandRequest::new(2, "Alice")).await, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_refuse_non_string_renter() {
        assert!(serde_json::from_str::<RentBookCommandRequest>(r#"{"rented_by": null}"#).is_err());
        assert!(serde_json::from_str::<RentBookCommandRequest>(r#"{"rented_by": 7}"#).is_err());
    }
}
