use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiCovError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },

    #[error("Invalid credentials: {0}")]
    Credentials(String),

    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Cannot read resource object: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("Invalid build number '{0}'")]
    InvalidBuildNumber(String),

    #[error("Unknown resource category: '{0}'. Supported: route, configuration, service")]
    UnknownCategory(String),

    #[error("No {0} records were observed; cannot compute coverage")]
    EmptyCategory(String),

    #[error("Field '{0}' is nested deeper than the walker allows")]
    DepthExceeded(String),
}

impl ApiCovError {
    /// Map a failed request, keeping the response body of HTTP errors.
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        let message = match err {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                format!("HTTP {}: {}", code, body.trim())
            }
            other => other.to_string(),
        };
        ApiCovError::Http {
            url: url.to_string(),
            message,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiCovError>;
