//! Schema bootstrapping from a static SQL script.
//!
//! The script is split on `;` with no awareness of string literals or
//! comments, so a separator inside a literal breaks the statement in two.
//! Keep the schema script free of them.

use super::DatabasePool;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};


/// Statement separator used in schema scripts.
pub const STATEMENT_SEPARATOR: char = ';';

/// Schema initialization errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema script could not be read.
    #[error("failed to read schema script {}: {source}", path.display())]
    Read {
        /// Path of the script.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A statement failed; no later statement was executed.
    #[error("schema statement #{index} failed: {source}\nStatement: {statement}")]
    Statement {
        /// One-based position of the statement in the script.
        index: usize,
        /// The failing statement text.
        statement: String,
        /// Underlying database error.
        #[source]
        source: sqlx::Error,
    },
}

/// Splits a script into trimmed, non-empty statements in file order.
#[must_use]
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(STATEMENT_SEPARATOR)
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// Executes every statement of `script` sequentially.
///
/// # Returns
/// The number of statements executed.
///
/// # Errors
/// Stops at the first failing statement and returns
/// [`SchemaError::Statement`] describing it.
pub async fn run_statements(db: &DatabasePool, script: &str) -> Result<usize, SchemaError> {
    let statements = split_statements(script);

    for (i, &statement) in statements.iter().enumerate() {
        debug!(index = i + 1, statement, "Executing schema statement");
        sqlx::query(statement)
            .execute(db.pool())
            .await
            .map_err(|source| SchemaError::Statement {
                index: i + 1,
                statement: statement.to_string(),
                source,
            })?;
    }

    Ok(statements.len())
}

/// Reads the schema script at `path` and executes it against `db`.
///
/// # Errors
/// Returns [`SchemaError::Read`] if the file cannot be read, or
/// [`SchemaError::Statement`] if a statement fails.
pub async fn initialize_schema<P: AsRef<Path>>(
    db: &DatabasePool,
    path: P,
) -> Result<usize, SchemaError> {
    let path = path.as_ref();
    info!("Initializing database schema from {}", path.display());

    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let executed = run_statements(db, &script).await?;
    info!("Database schema initialized ({} statements)", executed);

    Ok(executed)
}
