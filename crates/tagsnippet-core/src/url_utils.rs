use url::Url;

/// Normalize a URL to its origin (scheme + host + optional port).
///
/// Falls back to trimming trailing slashes if the input cannot be parsed.
pub fn normalize_origin(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed
            .origin()
            .ascii_serialization()
            .trim_end_matches('/')
            .to_string(),
        Err(_) => input.trim_end_matches('/').to_string(),
    }
}

/// Turn user input into an absolute http(s) URL.
///
/// Inputs without a scheme get an `https://` prefix, so `example.com/page`
/// becomes `https://example.com/page`. Returns `None` when the result does
/// not parse or uses a scheme other than http(s).
pub fn normalize_target_url(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).ok()?;
    if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() {
        Some(parsed)
    } else {
        None
    }
}

/// `scheme://` prefix check; a scheme is letters, digits, `+`, `-` or `.`
fn has_scheme(input: &str) -> bool {
    input.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_standard_url() {
        let url = "https://example.com/path/page?query=true";
        assert_eq!(normalize_origin(url), "https://example.com");
    }

    #[test]
    fn keeps_port_information() {
        let url = "https://example.com:8443/path";
        assert_eq!(normalize_origin(url), "https://example.com:8443");
    }

    #[test]
    fn trims_trailing_slash_when_parse_fails() {
        let url = "example.com/";
        assert_eq!(normalize_origin(url), "example.com");
    }

    #[test]
    fn adds_https_scheme_when_missing() {
        let url = normalize_target_url("  example.com/page ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn keeps_explicit_http_scheme() {
        let url = normalize_target_url("http://example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn rejects_empty_and_unsupported_input() {
        assert!(normalize_target_url("").is_none());
        assert!(normalize_target_url("   ").is_none());
        assert!(normalize_target_url("ftp://example.com").is_none());
        assert!(normalize_target_url("https://").is_none());
        assert!(normalize_target_url("http://exa mple.com").is_none());
    }

    #[test]
    fn prefixes_hosts_that_start_with_http() {
        let url = normalize_target_url("httpbin.org/get").unwrap();
        assert_eq!(url.as_str(), "https://httpbin.org/get");

        let url = normalize_target_url("https-proxy.example").unwrap();
        assert_eq!(url.as_str(), "https://https-proxy.example/");
    }

    #[test]
    fn urls_inside_the_query_are_not_a_scheme() {
        let url = normalize_target_url("example.com/login?next=https://example.com/").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.scheme(), "https");
    }
}
