//! Integration tests for the User Records API.
//!
//! The tests talk to a running server at `API_BASE_URL`
//! (default `http://localhost:8080`). Users are never deleted, so every test
//! creates usernames tagged with the current test run and only makes
//! assertions about the users it created itself.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use users_client::{ClientConfig, User, UsersClient};

/// Environment variable holding the server URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Prefix shared by every username created by these tests.
pub const USERNAME_PREFIX: &str = "itest";

/// Builds a client for the server under test.
///
/// # Errors
/// Returns error if `API_BASE_URL` is not a valid URL.
pub fn create_test_client() -> Result<UsersClient, users_client::Error> {
    let base_url = std::env::var(API_BASE_URL_VAR)
        .unwrap_or_else(|_| ClientConfig::default().base_url);

    UsersClient::new(ClientConfig {
        base_url,
        timeout: Duration::from_secs(10),
    })
}

/// Identifier of this test run: process id and start time in seconds.
fn run_tag() -> &'static str {
    static TAG: OnceLock<String> = OnceLock::new();
    TAG.get_or_init(|| {
        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        format!("{}{}", std::process::id(), started)
    })
}

/// Returns a username no other test or earlier run has used, shaped as
/// `itest-<label>-<run>-<seq>`.
#[must_use]
pub fn unique_username(label: &str) -> String {
    static SEQ: AtomicU32 = AtomicU32::new(1);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);

    format!("{USERNAME_PREFIX}-{label}-{}-{seq}", run_tag())
}

/// Returns the users carrying exactly `username`.
#[must_use]
pub fn with_username<'a>(users: &'a [User], username: &str) -> Vec<&'a User> {
    users.iter().filter(|u| u.username == username).collect()
}
