use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stage of a fallback chain failed and the next one was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
