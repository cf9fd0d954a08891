//! File-backed account store
//!
//! Keeps registered accounts as a JSON array on disk. Emails are unique
//! (ASCII case-insensitive). Passwords are accepted but never written out:
//! credential storage belongs to a real backend.

use super::{AuthError, AuthProvider};
use crate::config::SignupConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Environment override for the accounts file
pub const ACCOUNTS_ENV: &str = "SIGNUP_TUI_ACCOUNTS";

const DEFAULT_FILE_NAME: &str = "accounts.json";

/// An account as persisted by the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredAccount {
    pub id: Uuid,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

pub struct LocalAccountStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl LocalAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Resolve the store location: environment, then config, then the
    /// platform data directory
    pub fn from_config(config: &SignupConfig) -> Option<Self> {
        std::env::var(ACCOUNTS_ENV)
            .ok()
            .or_else(|| config.accounts_file.clone())
            .map(PathBuf::from)
            .or_else(Self::default_path)
            .map(Self::new)
    }

    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.data_dir().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All registered accounts
    pub async fn accounts(&self) -> Result<Vec<StoredAccount>, AuthError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn load(&self) -> Result<Vec<StoredAccount>, AuthError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, accounts: &[StoredAccount]) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(accounts)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for LocalAccountStore {
    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        _password: &str,
    ) -> Result<(), AuthError> {
        let _guard = self.lock.lock().await;
        let mut accounts = self.load().await?;

        if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            tracing::warn!(email, "registration for existing account");
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let account = StoredAccount {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: (!last_name.is_empty()).then(|| last_name.to_string()),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        tracing::info!(id = %account.id, email, "account registered");
        accounts.push(account);
        self.save(&accounts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("signup-tui-{}", Uuid::new_v4()))
            .join(DEFAULT_FILE_NAME)
    }

    async fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
    }

    #[tokio::test]
    async fn test_missing_file_has_no_accounts() {
        let store = LocalAccountStore::new(temp_store_path());
        assert!(store.accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_persists_account() {
        let path = temp_store_path();
        let store = LocalAccountStore::new(&path);

        store
            .register("Ada", "Lovelace", "ada@example.com", "secret")
            .await
            .unwrap();

        let accounts = store.accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].first_name, "Ada");
        assert_eq!(accounts[0].last_name.as_deref(), Some("Lovelace"));
        assert_eq!(accounts[0].email, "ada@example.com");

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_password_is_not_written() {
        let path = temp_store_path();
        let store = LocalAccountStore::new(&path);
        store
            .register("Ada", "", "ada@example.com", "hunter2-secret")
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!raw.contains("hunter2-secret"));
        assert!(!raw.contains("last_name"));

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let path = temp_store_path();
        let store = LocalAccountStore::new(&path);
        store
            .register("Ada", "", "ada@example.com", "secret")
            .await
            .unwrap();

        let err = store
            .register("Ada", "", "ADA@example.com", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(ref e) if e == "ADA@example.com"));
        assert_eq!(store.accounts().await.unwrap().len(), 1);

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_accounts_survive_new_store_instance() {
        let path = temp_store_path();
        LocalAccountStore::new(&path)
            .register("Ada", "", "ada@example.com", "secret")
            .await
            .unwrap();

        let reopened = LocalAccountStore::new(&path);
        let err = reopened
            .register("Grace", "Hopper", "ada@example.com", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(_)));

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let path = temp_store_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "[{").await.unwrap();

        let store = LocalAccountStore::new(&path);
        let err = store
            .register("Ada", "", "ada@example.com", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Serialization(_)));

        cleanup(&path).await;
    }

    #[test]
    fn test_from_config_prefers_configured_path() {
        // Only meaningful when the environment override is unset
        if std::env::var(ACCOUNTS_ENV).is_ok() {
            return;
        }
        let config = SignupConfig {
            accounts_file: Some("/srv/signup/accounts.json".to_string()),
            ..Default::default()
        };
        let store = LocalAccountStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/srv/signup/accounts.json"));
    }
}
