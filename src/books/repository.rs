pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // all books in insertion order, optionally only the ones on the shelf
    async fn find_all(&self, available_only: bool) -> LibraryResult<Vec<BookEntity>>;
}
