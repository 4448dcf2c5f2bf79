//! Short id generation contract.

use crate::error::AppError;

/// Produces short, URL-safe tokens used as mapping ids.
///
/// Tokens are random and carry no uniqueness guarantee; the store's
/// primary key is the only arbiter of collisions.
///
/// # Implementations
///
/// - [`crate::utils::id_generator::OsIdGenerator`] - OS entropy + URL-safe base64
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Generates a new token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RandomnessUnavailable`] if the entropy source fails.
    fn generate(&self) -> Result<String, AppError>;
}
