use crate::models::{MulticastOutcome, PushFailure, PushPayload};

/// A push delivery provider. Failures are classified values, not errors.
pub trait IPushChannel: Send + Sync {
    /// Send to one device, returning the provider message id.
    fn send_to_device(&self, token: &str, payload: &PushPayload) -> Result<String, PushFailure>;

    /// Send to at most 500 devices in one call.
    fn send_to_devices(
        &self,
        tokens: &[String],
        payload: &PushPayload,
    ) -> Result<MulticastOutcome, PushFailure>;

    fn send_to_topic(&self, topic: &str, payload: &PushPayload) -> Result<String, PushFailure>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool;
}
