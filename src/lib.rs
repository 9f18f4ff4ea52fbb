//! # User Records Backend - REST API Server
//!
//! A small REST API exposing user records persisted in SQLite. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and
//! [sqlx](https://crates.io/crates/sqlx) for database access, with
//! OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Startup
//!
//! 1. Configuration is loaded from `CONFIG_PATH` (TOML) or defaults, then
//!    `HOST`, `PORT`, `DATABASE_URL` and `SCHEMA_PATH` overrides apply.
//! 2. The SQLite pool is opened.
//! 3. The schema script is executed statement by statement. Any failure
//!    aborts startup before the listener is bound.
//! 4. The HTTP server accepts requests until Ctrl-C or SIGTERM, then the
//!    pool is closed.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`app`] | Startup assembly and serving with graceful shutdown |
//! | [`config`] | TOML configuration and environment overrides |
//! | [`db`] | Connection pool, schema bootstrapping and user queries |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state shared by handlers |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Welcome message |
//! | POST | `/users` | Create a user |
//! | GET | `/users` | List all users |
//!
//! ## Example Usage
//!
//! ```bash
//! # Development mode
//! cargo run
//!
//! # With a custom port and database
//! PORT=3000 DATABASE_URL=sqlite://data/users.db cargo run
//!
//! # Create a user
//! curl -X POST http://localhost:8080/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"username": "alice"}'
//!
//! # List users
//! curl http://localhost:8080/users
//! ```
//!
//! ## Swagger UI
//!
//! ```text
//! http://localhost:8080/swagger-ui/
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
