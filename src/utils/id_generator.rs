//! Short id generation and format checks.
//!
//! Ids are drawn from the OS entropy source and encoded as URL-safe base64
//! without padding.

use crate::domain::IdGenerator;
use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Number of random bytes drawn per id. Six bytes encode to eight characters.
pub const ID_LENGTH_BYTES: usize = 6;

/// Longest id accepted on lookup.
const MAX_ID_LENGTH: usize = 64;

/// URL-safe base64 alphabet, no padding.
static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Generates a random short id.
///
/// # Errors
///
/// Returns [`AppError::RandomnessUnavailable`] if the system random number
/// generator cannot be read. The failure is not retried.
///
/// # Examples
///
/// ```ignore
/// let id = generate_id()?;
/// assert_eq!(id.len(), 8);
/// ```
pub fn generate_id() -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::randomness_unavailable(
            "Failed to read system randomness",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if `id` could have been produced by the generator's alphabet.
///
/// Malformed ids can never be stored, so callers answer them with
/// `NotFound` without touching the store.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LENGTH && ID_REGEX.is_match(id)
}

/// [`IdGenerator`] backed by the operating system's entropy source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsIdGenerator;

impl IdGenerator for OsIdGenerator {
    fn generate(&self) -> Result<String, AppError> {
        generate_id()
    }
}
