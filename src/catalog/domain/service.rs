use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::{BookEntity, NewBook};
use crate::books::dto::{BookDto, CatalogStatsDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{BookId, Configuration};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::utils::date::today;

// CatalogServiceImpl serializes every operation on one lock around the repository,
// so each check-then-commit sequence is atomic. Events go out after the lock is
// released; a publish failure never undoes or fails a committed change.
pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Mutex<Box<dyn BookRepository>>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository: Mutex::new(book_repository),
            events_publisher,
        }
    }

    // The mutation has already committed, so a failed publish is only logged.
    async fn publish(&self, kind: DomainEventType, book: &BookDto, mut metadata: HashMap<String, String>) {
        metadata.insert("branch_id".to_string(), self.branch_id.to_string());
        let res = match DomainEvent::new(kind, book.id, metadata, book) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            tracing::error!(book_id = book.id, event = kind.event_name(), error = %err, "failed to publish domain event");
        }
    }
}

fn rejected(op: &'static str, id: BookId) -> impl FnOnce(LibraryError) -> LibraryError {
    move |err| {
        tracing::warn!(book_id = id, op, error = %err, "catalog operation rejected");
        err
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, available_only: bool) -> LibraryResult<Vec<BookDto>> {
        let repo = self.book_repository.lock().await;
        let books = repo.find_all(available_only).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        let repo = self.book_repository.lock().await;
        repo.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn add_book(&self, book: &NewBook) -> LibraryResult<BookDto> {
        let added = {
            let mut repo = self.book_repository.lock().await;
            let id = repo.next_id().await?;
            let entity = BookEntity::new(id, book.clone());
            repo.create(&entity).await?;
            BookDto::from(&entity)
        };
        tracing::info!(book_id = added.id, title = added.title.as_str(), "book added");
        self.publish(DomainEventType::Added, &added, HashMap::new()).await;
        Ok(added)
    }

    async fn rent_book(&self, id: BookId, renter_name: &str) -> LibraryResult<BookDto> {
        let rented = {
            let mut repo = self.book_repository.lock().await;
            let mut entity = repo.get(id).await.map_err(rejected("rent", id))?;
            entity.rent(renter_name, today()).map_err(rejected("rent", id))?;
            repo.update(&entity).await?;
            BookDto::from(&entity)
        };
        let renter = rented.rented_by.clone().unwrap_or_default();
        tracing::info!(book_id = id, rented_by = renter.as_str(), "book rented");
        self.publish(DomainEventType::Rented, &rented,
                     HashMap::from([("rented_by".to_string(), renter)])).await;
        Ok(rented)
    }

    async fn return_book(&self, id: BookId) -> LibraryResult<(BookDto, String)> {
        let (returned, returned_by) = {
            let mut repo = self.book_repository.lock().await;
            let mut entity = repo.get(id).await.map_err(rejected("return", id))?;
            let returned_by = entity.return_book(today()).map_err(rejected("return", id))?;
            repo.update(&entity).await?;
            (BookDto::from(&entity), returned_by)
        };
        tracing::info!(book_id = id, returned_by = returned_by.as_str(), "book returned");
        self.publish(DomainEventType::Returned, &returned,
                     HashMap::from([("returned_by".to_string(), returned_by.to_string())])).await;
        Ok((returned, returned_by))
    }

    async fn remove_book(&self, id: BookId) -> LibraryResult<BookDto> {
        let removed = {
            let mut repo = self.book_repository.lock().await;
            let entity = repo.delete(id).await.map_err(rejected("delete", id))?;
            BookDto::from(&entity)
        };
        tracing::info!(book_id = id, title = removed.title.as_str(), "book deleted");
        self.publish(DomainEventType::Deleted, &removed, HashMap::new()).await;
        Ok(removed)
    }

    async fn stats(&self) -> LibraryResult<CatalogStatsDto> {
        let repo = self.book_repository.lock().await;
        let books = repo.find_all(false).await?;
        Ok(CatalogStatsDto::from_books(&books))
    }
}
