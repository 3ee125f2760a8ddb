/// Reverse-geocoding stage errors. Never surfaced by the fallback chain.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("geocoder response malformed: {reason}")]
    MalformedResponse { reason: String },

    #[error("geocoder disabled: {reason}")]
    Disabled { reason: String },
}
