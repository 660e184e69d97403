//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search books with filters
    pub async fn search_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        self.repository
            .books
            .create(
                book.title.trim(),
                book.author.trim(),
                clean_description(book.description.as_deref()).as_deref(),
            )
            .await
    }

    /// Update an existing book (full replacement of the editable fields)
    pub async fn update_book(&self, id: i64, book: UpdateBook) -> AppResult<Book> {
        self.repository
            .books
            .update(
                id,
                book.title.trim(),
                book.author.trim(),
                clean_description(book.description.as_deref()).as_deref(),
            )
            .await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}

/// Whitespace-only descriptions are stored as absent
fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_description() {
        assert_eq!(clean_description(None), None);
        assert_eq!(clean_description(Some("")), None);
        assert_eq!(clean_description(Some("   ")), None);
        assert_eq!(clean_description(Some("  a tale  ")), Some("a tale".to_string()));
    }
}
