use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Notification content handed to a push channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl PushPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Classified push delivery failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushErrorKind {
    /// The device token is no longer valid; the caller should prune it.
    InvalidToken,
    /// Any other delivery failure. Logged, not retried.
    Transient,
    /// The channel is not configured or unreachable; the call is a no-op.
    ChannelUnavailable,
}

impl PushErrorKind {
    /// Map a provider error code onto a failure kind.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "messaging/invalid-registration-token"
            | "messaging/registration-token-not-registered"
            | "UNREGISTERED"
            | "INVALID_ARGUMENT"
            | "invalid_token" => Self::InvalidToken,
            "not-initialized" | "channel-unavailable" | "messaging/app-not-initialized" => {
                Self::ChannelUnavailable
            }
            _ => Self::Transient,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidToken => "invalid_token",
            Self::Transient => "transient",
            Self::ChannelUnavailable => "channel_unavailable",
        }
    }
}

impl fmt::Display for PushErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A push failure value. Never propagated past the dispatcher as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushFailure {
    pub kind: PushErrorKind,
    pub message: String,
}

impl PushFailure {
    pub fn new(kind: PushErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build a failure from a raw provider code, classifying it.
    pub fn from_provider_code(code: &str, message: impl Into<String>) -> Self {
        Self::new(PushErrorKind::from_provider_code(code), message)
    }

    pub fn channel_unavailable(message: impl Into<String>) -> Self {
        Self::new(PushErrorKind::ChannelUnavailable, message)
    }
}

impl fmt::Display for PushFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Outcome of one multi-device send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MulticastOutcome {
    pub success_count: usize,
    pub failure_count: usize,
    pub invalid_tokens: Vec<String>,
}
