use crate::books::domain::model::{BookEntity, NewBook};
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::date::parse_date;

pub(crate) async fn create_book_repository(seed_catalog: bool) -> LibraryResult<Box<dyn BookRepository>> {
    let mut repo = MemoryBookRepository::new();
    if seed_catalog {
        for book in sample_books()? {
            repo.create(&book).await?;
        }
        tracing::info!("seeded catalog with sample books");
    }
    Ok(Box::new(repo))
}

// the starter shelf served when the catalog binary boots
fn sample_books() -> LibraryResult<Vec<BookEntity>> {
    let samples = [
        ("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5", "Classic Fiction",
         "A classic American novel set in the Jazz Age."),
        ("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4", "Literary Fiction",
         "A timeless story of moral courage in the American South."),
        ("1984", "George Orwell", "978-0-452-28423-4", "Dystopian Fiction",
         "A haunting vision of a totalitarian future."),
        ("Pride and Prejudice", "Jane Austen", "978-0-14-143951-8", "Romance",
         "A witty and romantic tale of love and social expectations."),
        ("The Catcher in the Rye", "J.D. Salinger", "978-0-316-76948-0", "Coming of Age",
         "A controversial and influential coming-of-age story."),
    ];
    let mut books = Vec::with_capacity(samples.len());
    for (ndx, (title, author, isbn, genre, description)) in samples.into_iter().enumerate() {
        let new_book = NewBook::new(Some(title), Some(author), Some(isbn), Some(genre), Some(description))?;
        books.push(BookEntity::new(ndx as u64 + 1, new_book));
    }
    if let (Some(orwell), Some(rent_date)) = (books.get_mut(2), parse_date("2024-01-15")) {
        orwell.rent("John Doe", rent_date)?;
    }
    Ok(books)
}
