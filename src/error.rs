use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(#[from] minreq::Error),

    #[error("Changelog request to {url} returned HTTP {status}")]
    Http { url: String, status: i32 },
}

/// Convenience type alias for Results with PanelError
pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let panel_err: PanelError = io_err.into();
        assert!(matches!(panel_err, PanelError::Io(_)));
        assert!(panel_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_http_error_display() {
        let err = PanelError::Http {
            url: "https://example.com/changelog/2022-07-04.md".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Changelog request to https://example.com/changelog/2022-07-04.md returned HTTP 404"
        );
    }
}
