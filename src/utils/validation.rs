use crate::utils::error::{Result, TaskError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TaskError::config(format!("{}: URL cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TaskError::config(format!(
                "{}: unsupported URL scheme '{}' in '{}'",
                field_name, scheme, url_str
            ))),
        },
        Err(e) => Err(TaskError::config(format!(
            "{}: invalid URL format '{}': {}",
            field_name, url_str, e
        ))),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TaskError::config(format!("{}: path cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(TaskError::config(format!(
            "{}: path contains null bytes",
            field_name
        )));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaskError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("URL", "https://example.com").is_ok());
        assert!(validate_url("URL", "http://localhost:8080/health").is_ok());
        assert!(validate_url("URL", "").is_err());
        assert!(validate_url("URL", "invalid-url").is_err());
        assert!(validate_url("URL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "numbers.json").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("source", "file").is_ok());
        assert!(validate_non_empty_string("source", "   ").is_err());
    }
}
