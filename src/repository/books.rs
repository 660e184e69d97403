//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Search books with optional filters, ordered by title.
    /// SQLite LIKE is case-insensitive for ASCII, matching the reference behavior.
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(ref search) = query.search {
            let term = search.trim();
            if !term.is_empty() {
                let pattern = format!("%{}%", term);
                conditions.push("(title LIKE ? OR author LIKE ? OR description LIKE ?)");
                params.extend([pattern.clone(), pattern.clone(), pattern]);
            }
        }

        if let Some(ref author) = query.author {
            let term = author.trim();
            if !term.is_empty() {
                conditions.push("author LIKE ?");
                params.push(format!("%{}%", term));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT id, title, author, description FROM books{} ORDER BY title",
            where_clause
        );

        let mut q = sqlx::query_as::<_, Book>(&sql);
        for param in &params {
            q = q.bind(param);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Insert a new book and return it with its assigned id
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        description: Option<&str>,
    ) -> AppResult<Book> {
        let result = sqlx::query("INSERT INTO books (title, author, description) VALUES (?, ?, ?)")
            .bind(title)
            .bind(author)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            author: author.to_string(),
            description: description.map(|d| d.to_string()),
        })
    }

    /// Replace the editable fields of an existing book
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        description: Option<&str>,
    ) -> AppResult<Book> {
        let result = sqlx::query("UPDATE books SET title = ?, author = ?, description = ? WHERE id = ?")
            .bind(title)
            .bind(author)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.map(|d| d.to_string()),
        })
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }
}
