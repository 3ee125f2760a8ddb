//! Firebase Cloud Messaging HTTP v1 push channel.
//!
//! Requests need the `fcm` feature. Without it, or when push is disabled in
//! config, every send fails with `ChannelUnavailable` and the dispatcher
//! records the attempt as failed.

use serde::Deserialize;
use serde_json::{json, Value};

use safezone_core::config::PushConfig;
use safezone_core::errors::SafeZoneResult;
use safezone_core::models::{MulticastOutcome, PushErrorKind, PushFailure, PushPayload};
use safezone_core::traits::IPushChannel;

/// Where one FCM message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTarget<'a> {
    Token(&'a str),
    Topic(&'a str),
}

/// Build the `messages:send` request body.
pub fn build_message(target: MessageTarget<'_>, payload: &PushPayload, channel_id: &str) -> Value {
    let mut message = json!({
        "notification": {
            "title": payload.title,
            "body": payload.body,
        },
        "data": payload.data,
        "android": {
            "priority": "high",
            "notification": {
                "channel_id": channel_id,
                "sound": "default",
            },
        },
        "apns": {
            "payload": {
                "aps": { "sound": "default" },
            },
        },
    });
    match target {
        MessageTarget::Token(token) => message["token"] = json!(token),
        MessageTarget::Topic(topic) => message["topic"] = json!(topic),
    }
    json!({ "message": message })
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
}

/// Classify a non-2xx FCM response.
///
/// The FCM-specific `errorCode` in `details` wins over the generic status.
pub fn classify_error(http_status: u16, body: &str) -> PushFailure {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    let err = envelope.error;
    let code = err
        .details
        .iter()
        .find_map(|d| d.error_code.clone())
        .unwrap_or(err.status);
    let message = if err.message.is_empty() {
        format!("HTTP {http_status}")
    } else {
        format!("HTTP {http_status}: {}", err.message)
    };

    match (http_status, code.as_str()) {
        (401 | 403, _) => PushFailure::channel_unavailable(message),
        (_, "") => PushFailure::new(PushErrorKind::Transient, message),
        (_, code) => PushFailure::from_provider_code(code, message),
    }
}

#[cfg(feature = "fcm")]
#[derive(Debug, Deserialize)]
struct SendResponse {
    name: String,
}

pub struct FcmChannel {
    config: PushConfig,
    #[cfg(feature = "fcm")]
    client: reqwest::blocking::Client,
}

impl FcmChannel {
    pub fn new(config: PushConfig) -> SafeZoneResult<Self> {
        #[cfg(feature = "fcm")]
        {
            let client = reqwest::blocking::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .gzip(true)
                .build()
                .map_err(|e| safezone_core::errors::AlertError::ChannelInit {
                    reason: e.to_string(),
                })?;
            Ok(Self { config, client })
        }

        #[cfg(not(feature = "fcm"))]
        {
            Ok(Self { config })
        }
    }

    /// `{endpoint}/v1/projects/{project}/messages:send`, if a project is set.
    pub fn send_url(&self) -> Option<String> {
        let project = self.config.project_id.as_deref()?;
        Some(format!(
            "{}/v1/projects/{}/messages:send",
            self.config.endpoint.trim_end_matches('/'),
            project
        ))
    }

    fn ready(&self) -> Result<(String, &str), PushFailure> {
        if !self.config.enabled {
            return Err(PushFailure::channel_unavailable("push.enabled = false"));
        }
        if !cfg!(feature = "fcm") {
            return Err(PushFailure::channel_unavailable("fcm feature not enabled"));
        }
        let url = self
            .send_url()
            .ok_or_else(|| PushFailure::channel_unavailable("push.project_id is not set"))?;
        let token = self
            .config
            .bearer_token
            .as_deref()
            .ok_or_else(|| PushFailure::channel_unavailable("push.bearer_token is not set"))?;
        Ok((url, token))
    }

    #[cfg(feature = "fcm")]
    fn send(&self, target: MessageTarget<'_>, payload: &PushPayload) -> Result<String, PushFailure> {
        let (url, bearer) = self.ready()?;
        let body = build_message(target, payload, &self.config.android_channel_id);
        self.post(&url, bearer, &body)
    }

    #[cfg(not(feature = "fcm"))]
    fn send(&self, _target: MessageTarget<'_>, _payload: &PushPayload) -> Result<String, PushFailure> {
        self.ready()?;
        Err(PushFailure::channel_unavailable("fcm feature not enabled"))
    }

    #[cfg(feature = "fcm")]
    fn post(&self, url: &str, bearer: &str, body: &Value) -> Result<String, PushFailure> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .map_err(|e| PushFailure::new(PushErrorKind::Transient, e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            let sent: SendResponse = resp
                .json()
                .map_err(|e| PushFailure::new(PushErrorKind::Transient, e.to_string()))?;
            return Ok(sent.name);
        }
        let text = resp.text().unwrap_or_default();
        Err(classify_error(status.as_u16(), &text))
    }
}

impl IPushChannel for FcmChannel {
    fn send_to_device(&self, token: &str, payload: &PushPayload) -> Result<String, PushFailure> {
        self.send(MessageTarget::Token(token), payload)
    }

    /// HTTP v1 has no multicast endpoint, so each token is its own request.
    /// An unavailable channel fails the whole batch.
    fn send_to_devices(
        &self,
        tokens: &[String],
        payload: &PushPayload,
    ) -> Result<MulticastOutcome, PushFailure> {
        self.ready()?;
        let mut outcome = MulticastOutcome::default();
        for token in tokens {
            match self.send(MessageTarget::Token(token), payload) {
                Ok(_) => outcome.success_count += 1,
                Err(f) if f.kind == PushErrorKind::ChannelUnavailable => return Err(f),
                Err(f) => {
                    outcome.failure_count += 1;
                    if f.kind == PushErrorKind::InvalidToken {
                        outcome.invalid_tokens.push(token.clone());
                    }
                }
            }
        }
        Ok(outcome)
    }

    fn send_to_topic(&self, topic: &str, payload: &PushPayload) -> Result<String, PushFailure> {
        self.send(MessageTarget::Topic(topic), payload)
    }

    fn name(&self) -> &str {
        "fcm"
    }

    fn is_available(&self) -> bool {
        self.ready().is_ok()
    }
}
