use url::Url;

use crate::errors::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Parses an agency endpoint. Only absolute `http`/`https` URLs with a host are accepted.
pub fn validate_url(url: &str) -> ValidationResult<Url> {
    let parsed = Url::parse(url).map_err(|err| {
        ValidationError::from_msg(
            ValidationErrorKind::InvalidUrl,
            format!("Unable to parse url \"{url}\", details: {err}"),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(parsed),
        scheme => Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidUrl,
            format!("Url \"{url}\" must be an absolute http(s) url, found scheme \"{scheme}\""),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_valid() {
        let url = validate_url("https://agency.example.org/agency/msg").unwrap();
        assert_eq!(url.host_str(), Some("agency.example.org"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = validate_url("/agency/msg").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidUrl);
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = validate_url("ftp://agency.example.org").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidUrl);
    }
}
