use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, DEFAULT_GENRE};
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::BookStatus;
use crate::utils::date::date_serializer;

// BookDto is the wire form of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub rented_by: Option<String>,
    #[serde(with = "date_serializer")]
    pub rent_date: Option<NaiveDate>,
    #[serde(with = "date_serializer")]
    pub return_date: Option<NaiveDate>,
    pub genre: String,
    pub description: String,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            available: other.available,
            rented_by: other.rented_by.clone(),
            rent_date: other.rent_date,
            return_date: other.return_date,
            genre: other.genre.to_string(),
            description: other.description.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> BookId {
        self.id
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        BookStatus::from(self.available)
    }

    fn renter(&self) -> Option<&str> {
        self.rented_by.as_deref()
    }
}

// CatalogStatsDto summarizes the whole collection at the time of the call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CatalogStatsDto {
    pub total_books: usize,
    pub available_books: usize,
    pub rented_books: usize,
    pub genres: BTreeMap<String, usize>,
}

impl CatalogStatsDto {
    pub fn from_books(books: &[BookEntity]) -> Self {
        let mut genres = BTreeMap::new();
        for book in books {
            let genre = if book.genre.is_empty() { DEFAULT_GENRE } else { book.genre.as_str() };
            *genres.entry(genre.to_string()).or_insert(0) += 1;
        }
        let available_books = books.iter().filter(|b| b.status() == BookStatus::Available).count();
        Self {
            total_books: books.len(),
            available_books,
            rented_books: books.len() - available_books,
            genres,
        }
    }
}
