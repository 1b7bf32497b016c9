//! Local input checks that run before any network call.

use crate::ApiError;

/// Reject identifiers that are empty, whitespace-only, or the literal
/// strings `"undefined"`/`"null"` that a broken route parameter produces
/// upstream.
pub(crate) fn require_id<'a>(what: &str, id: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
        return Err(ApiError::InvalidArgument(format!("Invalid {what}")));
    }
    Ok(trimmed)
}

/// Reject empty or whitespace-only search keywords.
pub(crate) fn require_keyword(keyword: &str) -> Result<&str, ApiError> {
    if keyword.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "Search keyword is required".to_string(),
        ));
    }
    Ok(keyword)
}

/// Coerce a validated identifier to its numeric form.
pub(crate) fn require_numeric(what: &str, id: &str) -> Result<i64, ApiError> {
    require_id(what, id)?
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("Invalid {what} format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_rejects_sentinel_strings() {
        for bad in ["", "   ", "undefined", "null", " undefined "] {
            assert!(
                matches!(require_id("user ID", bad), Err(ApiError::InvalidArgument(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_require_id_trims_and_passes_valid_values() {
        assert_eq!(require_id("user ID", " 42 ").unwrap(), "42");
        assert_eq!(require_id("tag", "rust").unwrap(), "rust");
    }

    #[test]
    fn test_require_keyword_rejects_blank() {
        assert!(require_keyword("").is_err());
        assert!(require_keyword("   ").is_err());
        assert_eq!(require_keyword("rust async").unwrap(), "rust async");
    }

    #[test]
    fn test_require_numeric() {
        assert_eq!(require_numeric("author ID", "7").unwrap(), 7);
        assert!(matches!(
            require_numeric("author ID", "abc"),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            require_numeric("author ID", "undefined"),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
