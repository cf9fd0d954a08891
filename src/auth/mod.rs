//! Account registration: the provider seam plus a local file-backed store

mod error;
mod store;
mod traits;

pub use error::AuthError;
pub use store::LocalAccountStore;
pub use traits::AuthProvider;

#[cfg(test)]
pub use traits::MockAuthProvider;
