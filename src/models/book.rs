//! Book model and related request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A book in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

/// Book search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Matches title, author or description (case-insensitive substring)
    pub search: Option<String>,
    /// Matches author only
    pub author: Option<String>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 500, message = "Title is required and must not exceed 500 characters."))]
    pub title: String,
    #[validate(length(min = 1, max = 300, message = "Author is required and must not exceed 300 characters."))]
    pub author: String,
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters."))]
    pub description: Option<String>,
}

/// Update book request (full replacement of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 500, message = "Title is required and must not exceed 500 characters."))]
    pub title: String,
    #[validate(length(min = 1, max = 300, message = "Author is required and must not exceed 300 characters."))]
    pub author: String,
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters."))]
    pub description: Option<String>,
}
