//! Shared validation helpers used by entity constructors and mutators.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Rejects empty (or whitespace-only) strings.
pub fn require_non_empty(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Rejects strings that are not absolute URLs with both a scheme and a host.
pub fn require_valid_url(raw: &str) -> DomainResult<()> {
    let parsed = Url::parse(raw)
        .map_err(|e| DomainError::validation(format!("invalid URL '{raw}': {e}")))?;
    if !parsed.has_host() {
        return Err(DomainError::validation(format!("invalid URL '{raw}': missing host")));
    }
    Ok(())
}
