use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::model::NewBook;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

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

// Fields stay optional here so that a missing field is reported as a validation
// failure instead of a malformed body. A field that is present must be a string,
// null included.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(default, deserialize_with = "present_string")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub(crate) author: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub(crate) isbn: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub(crate) genre: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub(crate) description: Option<String>,
}

// only called for keys that appear in the body; absent keys take the default
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de> {
    String::deserialize(deserializer).map(Some)
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
            ..Self::default()
        }
    }

    pub fn build_book(&self) -> LibraryResult<NewBook> {
        NewBook::new(self.title.as_deref(), self.author.as_deref(), self.isbn.as_deref(),
                     self.genre.as_deref(), self.description.as_deref())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: "Book added successfully".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
