//! URL mapping entity: a short id bound to its original URL.

use chrono::{DateTime, Utc};

/// A stored mapping between a short id and the original URL.
///
/// Mappings are immutable once created: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
///
/// `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub id: String,
    pub original_url: String,
}

impl NewUrlMapping {
    pub fn new(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            "5cJpBVRp".to_string(),
            "https://encore.dev".to_string(),
            now,
        );

        assert_eq!(mapping.id, "5cJpBVRp");
        assert_eq!(mapping.original_url, "https://encore.dev");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_url_mapping_creation() {
        let new_mapping = NewUrlMapping::new("abcdefgh", "https://rust-lang.org");

        assert_eq!(new_mapping.id, "abcdefgh");
        assert_eq!(new_mapping.original_url, "https://rust-lang.org");
    }
}
