//! Application assembly: database, schema and router.

use crate::api::create_router;
use crate::config::Config;
use crate::db::{DatabasePool, initialize_schema};
use crate::error::ErrorResponse;
use crate::models::{CreateUserRequest, User, WelcomeResponse};
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;


/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::welcome,
        crate::api::handlers::create_user,
        crate::api::handlers::list_users,
    ),
    components(schemas(WelcomeResponse, CreateUserRequest, User, ErrorResponse)),
    tags(
        (name = "General", description = "Service information"),
        (name = "Users", description = "User record management"),
    ),
    info(
        title = "User Records API",
        version = "0.1.0",
        description = "REST API for creating and listing user records",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Opens the database, runs the schema script and builds the router.
///
/// The returned pool is the one shared by the router; the caller closes it
/// on shutdown.
///
/// # Errors
/// Returns an error if the database cannot be opened or any schema
/// statement fails. No router is built in that case.
pub async fn build_app(config: &Config) -> anyhow::Result<(Router, DatabasePool)> {
    info!("Initializing database...");
    let db = DatabasePool::new(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    if let Err(e) = initialize_schema(&db, &config.database.schema_path).await {
        db.close().await;
        return Err(e).context("failed to initialize database schema");
    }

    let state = Arc::new(AppState::new(db.clone()));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok((app, db))
}

/// Serves `app` on `listener` until `shutdown` resolves, then closes `db`.
///
/// The pool is closed whether the server stops cleanly or with an error.
///
/// # Errors
/// Returns the server error, after the pool has been closed.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    db: DatabasePool,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    db.close().await;
    served.context("server error")
}
