//! Unique test data so tests sharing a database never see each other's rows.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique owner email in the reserved `example.test` domain.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("owner");
/// let b = unique_email("owner");
/// assert_ne!(a, b);
/// assert!(a.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.test", unique_str(prefix).to_lowercase())
}
