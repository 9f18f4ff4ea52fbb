//! Request and response models for the REST API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    /// Identifier assigned by the database on insert.
    pub id: i64,
    /// Username as submitted by the client.
    pub username: String,
}

/// Request to create a user. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username to store.
    pub username: String,
}

/// Response for the root endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the API!".to_string(),
        }
    }
}
