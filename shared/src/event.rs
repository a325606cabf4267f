use serde::{Deserialize, Serialize};

/// Requests the presentation layer sends to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListIntent {
    LoadInitial,
    Refresh,
    LoadMore,
}

impl ListIntent {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LoadInitial => "load_initial",
            Self::Refresh => "refresh",
            Self::LoadMore => "load_more",
        }
    }

    #[must_use]
    pub const fn fetch_kind(self) -> FetchKind {
        match self {
            Self::LoadInitial => FetchKind::Initial,
            Self::Refresh => FetchKind::Refresh,
            Self::LoadMore => FetchKind::More,
        }
    }
}

/// Which in-flight flag a fetch owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchKind {
    Initial,
    Refresh,
    More,
}

impl FetchKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Refresh => "refresh",
            Self::More => "more",
        }
    }
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot notification. Not part of [`crate::ListState`]; subscribers that
/// are not listening when it is emitted never see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    Error { message: Option<String> },
}

impl ListEvent {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => message.as_deref(),
        }
    }

    /// Event text, or `default` when the failure carried none.
    #[must_use]
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_name() {
        assert_eq!(ListIntent::LoadInitial.name(), "load_initial");
        assert_eq!(ListIntent::Refresh.name(), "refresh");
        assert_eq!(ListIntent::LoadMore.name(), "load_more");
    }

    #[test]
    fn test_intent_fetch_kind() {
        assert_eq!(ListIntent::LoadInitial.fetch_kind(), FetchKind::Initial);
        assert_eq!(ListIntent::Refresh.fetch_kind(), FetchKind::Refresh);
        assert_eq!(ListIntent::LoadMore.fetch_kind(), FetchKind::More);
    }

    #[test]
    fn test_event_message_or_default() {
        let with_text = ListEvent::Error {
            message: Some("Network error".into()),
        };
        assert_eq!(with_text.message_or("fallback"), "Network error");

        let without = ListEvent::Error { message: None };
        assert_eq!(without.message_or("fallback"), "fallback");
    }
}
