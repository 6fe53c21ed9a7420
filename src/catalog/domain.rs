pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::NewBook;
use crate::books::dto::{BookDto, CatalogStatsDto};
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self, available_only: bool) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &NewBook) -> LibraryResult<BookDto>;
    async fn rent_book(&self, id: BookId, renter_name: &str) -> LibraryResult<BookDto>;
    // returns the updated book along with the renter who brought it back
    async fn return_book(&self, id: BookId) -> LibraryResult<(BookDto, String)>;
    async fn remove_book(&self, id: BookId) -> LibraryResult<BookDto>;
    async fn stats(&self) -> LibraryResult<CatalogStatsDto>;
}
