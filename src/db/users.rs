//! User record queries.

use super::DatabasePool;
use crate::models::User;

impl DatabasePool {
    /// Inserts a user and returns it with the identifier the database
    /// assigned.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_user(&self, username: &str) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (username) VALUES (?)")
            .bind(username)
            .execute(self.pool())
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
        })
    }

    /// Lists every user ordered by identifier.
    ///
    /// # Errors
    /// Returns an error if the query or decoding any row fails; no partial
    /// result is returned.
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(self.pool())
            .await
    }
}
