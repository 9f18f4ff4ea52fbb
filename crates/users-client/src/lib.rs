//! HTTP client library for the User Records API.
//!
//! # Example
//!
//! ```no_run
//! use users_client::{ClientConfig, UsersClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), users_client::Error> {
//!     let client = UsersClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let user = client.create_user("alice").await?;
//!     println!("Created user {} with id {}", user.username, user.id);
//!
//!     for user in client.list_users().await? {
//!         println!("{}: {}", user.id, user.username);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, UsersClient};
pub use error::Error;
pub use types::*;
