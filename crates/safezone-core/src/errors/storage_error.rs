/// Errors raised by the external persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("point store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("write failed for {entity}: {reason}")]
    WriteFailed { entity: String, reason: String },
}
