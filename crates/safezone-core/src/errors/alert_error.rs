/// Alert dispatch errors. Push delivery failures are not errors; they are
/// recorded on the `AlertEvent`.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("no matched zones to alert on")]
    NoMatchedZones,

    #[error("invalid delivery transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("failed to build batch pool: {reason}")]
    PoolBuildFailed { reason: String },

    #[error("failed to initialise push channel: {reason}")]
    ChannelInit { reason: String },
}
