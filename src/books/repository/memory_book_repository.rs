use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::BookId;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog as one ordered vector. Lookups are
// linear scans; last_id only ever grows so deleted ids are never handed out again.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
    last_id: BookId,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: BookId) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found("Book not found"))
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn next_id(&mut self) -> LibraryResult<BookId> {
        let highest = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(highest) + 1;
        Ok(self.last_id)
    }

    async fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.books.iter().any(|b| b.id == entity.id) {
            return Err(LibraryError::runtime(
                format!("book {} already exists", entity.id).as_str(), Some("409".to_string())));
        }
        self.last_id = self.last_id.max(entity.id);
        self.books.push(entity.clone());
        Ok(1)
    }

    async fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.id)?;
        self.books[ndx] = entity.clone();
        Ok(1)
    }

    async fn get(&self, id: BookId) -> LibraryResult<BookEntity> {
        let ndx = self.position(id)?;
        Ok(self.books[ndx].clone())
    }

    async fn delete(&mut self, id: BookId) -> LibraryResult<BookEntity> {
        let ndx = self.position(id)?;
        Ok(self.books.remove(ndx))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self, available_only: bool) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter()
            .filter(|b| !available_only || b.available)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::model::{BookEntity, NewBook};
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    async fn add(repo: &mut MemoryBookRepository, title: &str) -> BookEntity {
        let id = repo.next_id().await.expect("should allocate id");
        let new_book = NewBook::new(Some(title), Some("author"), Some("isbn"), None, None).expect("valid book");
        let book = BookEntity::new(id, new_book);
        repo.create(&book).await.expect("should create book");
        book
    }

    #[tokio::test]
    async fn test_should_start_ids_at_one() {
        let mut repo = MemoryBookRepository::new();
        assert_eq!(1, add(&mut repo, "first").await.id);
        assert_eq!(2, add(&mut repo, "second").await.id);
    }

    #[tokio::test]
    async fn test_should_never_reuse_deleted_ids() {
        let mut repo = MemoryBookRepository::new();
        let mut seen = vec![];
        for i in 0..5 {
            let book = add(&mut repo, format!("book {}", i).as_str()).await;
            seen.push(book.id);
            if i % 2 == 0 {
                let _ = repo.delete(book.id).await.expect("should delete book");
            }
        }
        let last = add(&mut repo, "last").await;
        seen.push(last.id);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(6, last.id);
    }

    #[tokio::test]
    async fn test_should_continue_after_seeded_ids() {
        let mut repo = MemoryBookRepository::new();
        let new_book = NewBook::new(Some("seed"), Some("author"), Some("isbn"), None, None).expect("valid book");
        repo.create(&BookEntity::new(5, new_book)).await.expect("should create book");
        assert_eq!(6, repo.next_id().await.expect("should allocate id"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_ids() {
        let mut repo = MemoryBookRepository::new();
        let book = add(&mut repo, "first").await;
        let res = repo.create(&book).await;
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
        assert_eq!(1, repo.find_all(false).await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_get_update_and_delete() {
        let mut repo = MemoryBookRepository::new();
        let mut book = add(&mut repo, "first").await;
        book.rent("Alice", NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")).expect("should rent");
        repo.update(&book).await.expect("should update");
        assert_eq!(book, repo.get(book.id).await.expect("should get"));

        let removed = repo.delete(book.id).await.expect("should delete");
        assert_eq!("first", removed.title.as_str());
        assert!(matches!(repo.get(book.id).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(repo.delete(book.id).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(repo.update(&book).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_filter_available_in_order() {
        let mut repo = MemoryBookRepository::new();
        let _ = add(&mut repo, "a").await;
        let mut b = add(&mut repo, "b").await;
        let _ = add(&mut repo, "c").await;
        b.rent("Alice", NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")).expect("should rent");
        repo.update(&b).await.expect("should update");

        let all: Vec<String> = repo.find_all(false).await.expect("should list").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["a", "b", "c"], all);
        let available: Vec<String> = repo.find_all(true).await.expect("should list").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["a", "c"], available);
    }
}
