use chrono::NaiveDate;
use crate::books::domain::Book;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub const DEFAULT_GENRE: &str = "General";

// NewBook is the validated, trimmed input for adding a title to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub description: String,
}

impl NewBook {
    pub fn new(title: Option<&str>, author: Option<&str>, isbn: Option<&str>,
               genre: Option<&str>, description: Option<&str>) -> LibraryResult<Self> {
        let title = required("title", title)?;
        let author = required("author", author)?;
        let isbn = required("isbn", isbn)?;
        let genre = match genre.map(str::trim) {
            Some(genre) if !genre.is_empty() => genre.to_string(),
            _ => DEFAULT_GENRE.to_string(),
        };
        Ok(Self {
            title,
            author,
            isbn,
            genre,
            description: description.map(str::trim).unwrap_or_default().to_string(),
        })
    }
}

fn required(field: &str, value: Option<&str>) -> LibraryResult<String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(LibraryError::validation(
            format!("Missing required field: {}", field).as_str(), Some("400".to_string()))),
    }
}

// BookEntity is a single catalog entry and its current rental record. A rented
// book always carries rented_by and rent_date; rent_date and return_date outlive
// the rental they describe until the next transition overwrites them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookEntity {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub rented_by: Option<String>,
    pub rent_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub genre: String,
    pub description: String,
}

impl BookEntity {
    pub fn new(id: BookId, book: NewBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            available: true,
            rented_by: None,
            rent_date: None,
            return_date: None,
            genre: book.genre,
            description: book.description,
        }
    }

    // Available -> Rented. Nothing is touched unless every guard passes.
    pub fn rent(&mut self, renter_name: &str, today: NaiveDate) -> LibraryResult<()> {
        if !self.available {
            return Err(LibraryError::already_rented(self.rented_by.as_deref().unwrap_or_default()));
        }
        let renter_name = renter_name.trim();
        if renter_name.is_empty() {
            return Err(LibraryError::validation("Renter name is required", Some("400".to_string())));
        }
        self.available = false;
        self.rented_by = Some(renter_name.to_string());
        self.rent_date = Some(today);
        self.return_date = None;
        Ok(())
    }

    // Rented -> Available, yielding the renter who brought the book back.
    pub fn return_book(&mut self, today: NaiveDate) -> LibraryResult<String> {
        if self.available {
            return Err(LibraryError::not_rented());
        }
        let returned_by = self.rented_by.take().unwrap_or_default();
        self.available = true;
        self.return_date = Some(today);
        Ok(returned_by)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> BookId {
        self.id
    }
}

impl Book for BookEntity {
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

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, NewBook};
    use crate::core::library::{BookStatus, LibraryError};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
    }

    fn new_book() -> BookEntity {
        let book = NewBook::new(Some("1984"), Some("Orwell"), Some("X"), None, None).expect("valid book");
        BookEntity::new(1, book)
    }

    #[tokio::test]
    async fn test_should_trim_and_default_new_book() {
        let book = NewBook::new(Some("  Dune "), Some(" Herbert"), Some("isbn "), Some("   "), Some(" desert ")).expect("valid book");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("General", book.genre.as_str());
        assert_eq!("desert", book.description.as_str());

        let book = NewBook::new(Some("Dune"), Some("Herbert"), Some("isbn"), Some(" Sci-Fi "), None).expect("valid book");
        assert_eq!("Sci-Fi", book.genre.as_str());
        assert_eq!("", book.description.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_missing_fields_in_order() {
        let err = NewBook::new(None, None, None, None, None).expect_err("title missing");
        assert_eq!("Missing required field: title", err.message());
        let err = NewBook::new(Some("t"), Some(" \t"), None, None, None).expect_err("author blank");
        assert_eq!("Missing required field: author", err.message());
        let err = NewBook::new(Some("t"), Some("a"), Some(""), None, None).expect_err("isbn empty");
        assert_eq!("Missing required field: isbn", err.message());
    }

    #[tokio::test]
    async fn test_should_start_available() {
        let book = new_book();
        assert_eq!(BookStatus::Available, book.status());
        assert_eq!(None, book.renter());
        assert_eq!(None, book.rent_date);
        assert_eq!(None, book.return_date);
    }

    #[tokio::test]
    async fn test_should_rent_and_return() {
        let mut book = new_book();
        book.rent("  Alice ", day(1)).expect("should rent");
        assert_eq!(BookStatus::Rented, book.status());
        assert_eq!(Some("Alice"), book.renter());
        assert_eq!(Some(day(1)), book.rent_date);
        assert_eq!(None, book.return_date);

        let returned_by = book.return_book(day(5)).expect("should return");
        assert_eq!("Alice", returned_by.as_str());
        assert!(book.available);
        assert_eq!(None, book.rented_by);
        assert_eq!(Some(day(1)), book.rent_date);
        assert_eq!(Some(day(5)), book.return_date);

        book.rent("Bob", day(9)).expect("should rent again");
        assert_eq!(Some(day(9)), book.rent_date);
        assert_eq!(None, book.return_date);
    }

    #[tokio::test]
    async fn test_should_not_rent_twice() {
        let mut book = new_book();
        book.rent("Alice", day(1)).expect("should rent");
        let before = book.clone();
        let err = book.rent("Bob", day(2)).expect_err("already rented");
        assert!(matches!(err, LibraryError::AlreadyRented { ref rented_by, .. } if rented_by == "Alice"));
        assert_eq!(before, book);
    }

    #[tokio::test]
    async fn test_should_report_already_rented_before_blank_renter() {
        let mut book = new_book();
        book.rent("Alice", day(1)).expect("should rent");
        let err = book.rent("  ", day(2)).expect_err("already rented");
        assert!(matches!(err, LibraryError::AlreadyRented { .. }));
    }

    #[tokio::test]
    async fn test_should_require_renter_name() {
        let mut book = new_book();
        let before = book.clone();
        let err = book.rent(" ", day(1)).expect_err("blank renter");
        assert_eq!("Renter name is required", err.message());
        assert_eq!(before, book);
    }

    #[tokio::test]
    async fn test_should_not_return_available_book() {
        let mut book = new_book();
        let before = book.clone();
        let err = book.return_book(day(1)).expect_err("not rented");
        assert!(matches!(err, LibraryError::NotRented { .. }));
        assert_eq!(before, book);
    }
}
