//! Log sanitization utilities
//!
//! Prevents sensitive data (API keys in query strings, long user text)
//! from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Query parameters whose values are replaced before a URL is logged.
const SECRET_QUERY_PARAMS: &[&str] = &["key", "api_key", "access_token"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Replace secret query parameter values in a URL with `***`.
///
/// `https://host/path?key=abc&x=1` becomes `https://host/path?key=***&x=1`.
/// URLs without a query string are returned unchanged.
pub fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let redacted: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if SECRET_QUERY_PARAMS.contains(&name) => format!("{name}=***"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}?{}", redacted.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // Ensure truncation doesn't split multi-byte characters
        let s = "こ".repeat(200); // Each 'こ' is 3 bytes
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn redacts_key_param() {
        let url = "https://translation.googleapis.com/language/translate/v2?key=AIzaSecret";
        assert_eq!(
            redact_api_key(url),
            "https://translation.googleapis.com/language/translate/v2?key=***"
        );
    }

    #[test]
    fn keeps_other_params() {
        let url = "https://example.com/t?format=text&key=abc&target=es";
        assert_eq!(
            redact_api_key(url),
            "https://example.com/t?format=text&key=***&target=es"
        );
    }

    #[test]
    fn url_without_query_unchanged() {
        let url = "https://example.com/translate";
        assert_eq!(redact_api_key(url), url);
    }
}
