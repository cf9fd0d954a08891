//! Registration errors

use thiserror::Error;

/// Why a registration did not go through.
///
/// The signup form shows one fixed message for every variant; the detail
/// only reaches the log.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("an authentication provider is required for this form")]
    ProviderMissing,

    #[error("an account already exists for {0}")]
    EmailTaken(String),

    #[error("registration rejected: {0}")]
    Rejected(String),

    #[error("account store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("account store is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AuthError::EmailTaken("ada@example.com".to_string()).to_string(),
            "an account already exists for ada@example.com"
        );
        assert_eq!(
            AuthError::ProviderMissing.to_string(),
            "an authentication provider is required for this form"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: AuthError = std::io::Error::other("disk full").into();
        assert!(matches!(err, AuthError::Io(_)));
    }
}
