use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validate a feed endpoint.
///
/// Any http(s) URL is accepted, including loopback hosts, so a locally
/// served copy of the sheet can be used.
pub fn validate_endpoint(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }
}

/// Validate a media link before handing it to the system opener.
///
/// Links come straight from sheet cells, so anything that is not a plain
/// http(s) URL (`file:`, `javascript:`, custom handlers) is refused.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = validate_endpoint(url_str)?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlValidationError::InvalidUrl(url::ParseError::EmptyHost));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_accepts_https_and_loopback() {
        assert!(validate_endpoint("https://opensheet.elk.sh/abc/HelpTopics").is_ok());
        assert!(validate_endpoint("http://127.0.0.1:8080/sheet").is_ok());
    }

    #[test]
    fn endpoint_rejects_other_schemes() {
        let err = validate_endpoint("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, UrlValidationError::UnsupportedScheme(s) if s == "file"));
    }

    #[test]
    fn endpoint_rejects_garbage() {
        assert!(matches!(
            validate_endpoint("not a url"),
            Err(UrlValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn open_accepts_drive_links() {
        let url = validate_url_for_open("https://drive.google.com/file/d/abc/preview").unwrap();
        assert_eq!(url.host_str(), Some("drive.google.com"));
    }

    #[test]
    fn open_rejects_script_and_custom_schemes() {
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
        assert!(validate_url_for_open("vscode://open?file=x").is_err());
    }
}
