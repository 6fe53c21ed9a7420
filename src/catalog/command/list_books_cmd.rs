use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) available_only: bool,
}

impl ListBooksCommandRequest {
    pub fn new(available_only: bool) -> Self {
        Self {
            available_only,
        }
    }

    // only a literal "true" (any case) narrows the listing
    pub fn from_query(available: Option<&str>) -> Self {
        Self::new(available.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false))
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub count: usize,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            count: books.len(),
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.available_only)
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::command::rent_book_cmd::{RentBookCommand, RentBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_parse_available_query() {
        assert!(ListBooksCommandRequest::from_query(Some("true")).available_only);
        assert!(ListBooksCommandRequest::from_query(Some("TRUE")).available_only);
        assert!(!ListBooksCommandRequest::from_query(Some("false")).available_only);
        assert!(!ListBooksCommandRequest::from_query(Some("yes")).available_only);
        assert!(!ListBooksCommandRequest::from_query(None).available_only);
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let add_cmd = AddBookCommand::new(svc.clone());
        let rent_cmd = RentBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);

        for title in ["a", "b", "c"] {
            let _ = add_cmd.execute(AddBookCommandRequest::new(title, "author", "isbn")).await.expect("should add book");
        }
        let _ = rent_cmd.execute(RentBookCommandRequest::new(1, "Alice")).await.expect("should rent book");

        let all = list_cmd.execute(ListBooksCommandRequest::new(false)).await.expect("should list books");
        assert_eq!(3, all.count);
        let available = list_cmd.execute(ListBooksCommandRequest::new(true)).await.expect("should list books");
        assert_eq!(2, available.count);
        assert_eq!(vec![2, 3], available.books.iter().map(|b| b.id).collect::<Vec<u64>>());
    }
}
