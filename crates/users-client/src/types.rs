//! Request and response types for the users API.

use serde::{Deserialize, Serialize};


/// Welcome message returned by the root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
}

/// User record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the server.
    pub id: i64,
    /// Username.
    pub username: String,
}

/// Request to create a user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    /// Username to store.
    pub username: String,
}

impl CreateUserRequest {
    /// Creates a request for `username`.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}
