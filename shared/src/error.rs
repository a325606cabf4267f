use thiserror::Error;

/// Failure of a single page fetch.
///
/// The store does not branch on the variant: every failure clears the
/// in-flight flag and surfaces as a [`crate::ListEvent::Error`]. The variants
/// exist so `RemoteSource` implementations can report what went wrong and so
/// logs stay useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned status {code}")]
    Status { code: u16, body: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request failed")]
    Other(Option<String>),
}

impl FetchError {
    /// Human-readable text carried by the failure, if there is any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let text = match self {
            Self::Network(msg) | Self::Decode(msg) => Some(msg.clone()),
            Self::Timeout => Some("Request timed out".to_string()),
            Self::Status { code, body } => Some(
                body.clone()
                    .filter(|b| !b.trim().is_empty())
                    .unwrap_or_else(|| format!("Server returned status {code}")),
            ),
            Self::Other(msg) => msg.clone(),
        };

        text.filter(|t| !t.trim().is_empty())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("page size {size} is outside 1..={max}")]
    PageSize { size: usize, max: usize },

    #[error("event capacity must be > 0")]
    EventCapacity,
}
