mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_MAX_TRACKED};
