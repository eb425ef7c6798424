//! URL helpers.

use url::Url;

/// Host of a URL as entered by the user, with the port appended when it is
/// not the scheme's default.
///
/// Inputs without a scheme are treated as `http://`. Blank or unparsable
/// input yields `None`.
pub fn url_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if trimmed.contains("://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("http://{trimmed}"))
    }
    .ok()?;

    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{host}:{port}")),
        None => Some(host.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_without_scheme() {
        assert_eq!(url_host("  example.com/login "), Some("example.com".into()));
    }

    #[test]
    fn default_port_is_dropped() {
        assert_eq!(url_host("https://vault.example.com:443/x"), Some("vault.example.com".into()));
        assert_eq!(
            url_host("https://vault.example.com:8443/x"),
            Some("vault.example.com:8443".into())
        );
    }

    #[test]
    fn blank_or_invalid_is_none() {
        assert_eq!(url_host("   "), None);
        assert_eq!(url_host("http://"), None);
        assert_eq!(url_host("http://exa mple.com"), None);
    }
}
