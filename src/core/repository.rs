use async_trait::async_trait;
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // reserve an identifier that has never been handed out before
    async fn next_id(&mut self) -> LibraryResult<BookId>;

    // create an entity
    async fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: BookId) -> LibraryResult<Entity>;

    // delete an entity, returning what was removed
    async fn delete(&mut self, id: BookId) -> LibraryResult<Entity>;
}
