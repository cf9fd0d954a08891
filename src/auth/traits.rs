//! Trait abstraction for the registration capability to enable mocking in tests

use super::AuthError;
use async_trait::async_trait;

/// Something that can create a new account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Persist a new account. Fails when the account is rejected.
    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError>;
}
