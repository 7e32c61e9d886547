use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Vetted literals; construction cannot fail.
#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Three base64url segments separated by dots: a compact JWT.
#[allow(clippy::unwrap_used)]
static JWT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

/// Mask emails (first character of the local part kept, domain kept) and
/// replace anything that looks like a JWT with `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let tokens_masked = JWT.replace_all(input, "[REDACTED_TOKEN]");

    EMAIL
        .replace_all(&tokens_masked, |caps: &regex::Captures| {
            let found = &caps[0];
            match found.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    let first: String = local.chars().take(1).collect();
                    format!("{first}***@{domain}")
                }
                _ => found.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
