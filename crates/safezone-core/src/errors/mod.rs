mod alert_error;
mod geocode_error;
mod storage_error;

pub use alert_error::AlertError;
pub use geocode_error::GeocodeError;
pub use storage_error::StorageError;

/// Root error type for the SafeZone engine.
#[derive(Debug, thiserror::Error)]
pub enum SafeZoneError {
    #[error("zone not found: {id}")]
    ZoneNotFound { id: String },

    #[error("case not found: {id}")]
    CaseNotFound { id: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("alert error: {0}")]
    AlertError(#[from] AlertError),

    #[error("geocode error: {0}")]
    GeocodeError(#[from] GeocodeError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SafeZoneError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether the web layer should map this to a Not-Found status.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ZoneNotFound { .. } | Self::CaseNotFound { .. })
    }
}

pub type SafeZoneResult<T> = Result<T, SafeZoneError>;
