use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a notice after a failed write: the server's `detail` when it
    /// sent one, `generic_status` for other bad statuses, `generic_failure`
    /// when the call itself failed.
    pub fn notice_text(&self, generic_status: &str, generic_failure: &str) -> String {
        match self {
            ApiError::Status { detail: Some(d), .. } if !d.is_empty() => d.clone(),
            ApiError::Status { .. } => generic_status.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => generic_failure.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
