//! A push channel whose failures are scripted per token.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use safezone_core::models::{MulticastOutcome, PushErrorKind, PushFailure, PushPayload};
use safezone_core::traits::IPushChannel;

/// Scriptable `IPushChannel`.
///
/// - tokens in `invalid` fail with `InvalidToken`;
/// - any multicast batch containing a `poison` token fails as a whole;
/// - `unavailable()` makes every call a `ChannelUnavailable` failure.
#[derive(Debug, Default)]
pub struct ScriptedPushChannel {
    invalid: HashSet<String>,
    poison: HashSet<String>,
    unavailable: bool,
    next_id: AtomicUsize,
    batch_sizes: Mutex<Vec<usize>>,
    device_sends: Mutex<Vec<String>>,
    topic_sends: Mutex<Vec<(String, PushPayload)>>,
}

impl ScriptedPushChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_invalid_token(mut self, token: &str) -> Self {
        self.invalid.insert(token.to_string());
        self
    }

    /// Any batch containing `token` fails with a transient error.
    pub fn with_poison_token(mut self, token: &str) -> Self {
        self.poison.insert(token.to_string());
        self
    }

    /// Sizes of every multicast call, in completion order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap().clone()
    }

    pub fn device_sends(&self) -> Vec<String> {
        self.device_sends.lock().unwrap().clone()
    }

    pub fn topic_sends(&self) -> Vec<(String, PushPayload)> {
        self.topic_sends.lock().unwrap().clone()
    }

    fn message_id(&self) -> String {
        format!("msg-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn check_available(&self) -> Result<(), PushFailure> {
        if self.unavailable {
            Err(PushFailure::channel_unavailable("scripted channel unavailable"))
        } else {
            Ok(())
        }
    }
}

impl IPushChannel for ScriptedPushChannel {
    fn send_to_device(&self, token: &str, _payload: &PushPayload) -> Result<String, PushFailure> {
        self.check_available()?;
        self.device_sends.lock().unwrap().push(token.to_string());
        if self.invalid.contains(token) {
            return Err(PushFailure::from_provider_code(
                "messaging/registration-token-not-registered",
                format!("token {token} not registered"),
            ));
        }
        Ok(self.message_id())
    }

    fn send_to_devices(
        &self,
        tokens: &[String],
        _payload: &PushPayload,
    ) -> Result<MulticastOutcome, PushFailure> {
        self.check_available()?;
        self.batch_sizes.lock().unwrap().push(tokens.len());
        if tokens.iter().any(|t| self.poison.contains(t)) {
            return Err(PushFailure::new(
                PushErrorKind::Transient,
                "scripted batch failure",
            ));
        }
        let invalid_tokens: Vec<String> = tokens
            .iter()
            .filter(|t| self.invalid.contains(*t))
            .cloned()
            .collect();
        Ok(MulticastOutcome {
            success_count: tokens.len() - invalid_tokens.len(),
            failure_count: invalid_tokens.len(),
            invalid_tokens,
        })
    }

    fn send_to_topic(&self, topic: &str, payload: &PushPayload) -> Result<String, PushFailure> {
        self.check_available()?;
        self.topic_sends
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.clone()));
        Ok(self.message_id())
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        !self.unavailable
    }
}
