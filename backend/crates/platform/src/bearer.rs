//! Bearer Credential Parsing
//!
//! Reads `Authorization: Bearer <token>` headers (RFC 6750).

use axum::http::{HeaderMap, header};

const BEARER_SCHEME: &str = "bearer";

/// Get the raw `Authorization` header value, if present and valid ASCII.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()
}

/// Extract the token from a raw `Authorization` header value
///
/// The scheme is matched case-insensitively. Returns `None` for other
/// schemes or an empty token.
pub fn parse_bearer(raw: &str) -> Option<&str> {
    let (scheme, token) = raw.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer("bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer("  BEARER   abc.def  "), Some("abc.def"));
    }

    #[test]
    fn test_parse_bearer_rejects() {
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer("Bearer"), None);
        assert_eq!(parse_bearer("Bearer    "), None);
        assert_eq!(parse_bearer("abc.def"), None);
        assert_eq!(parse_bearer(""), None);
    }

    #[test]
    fn test_authorization_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(authorization_header(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token123"),
        );
        assert_eq!(authorization_header(&headers), Some("Bearer token123"));
    }
}
