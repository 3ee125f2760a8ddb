//! Data model shared by every engine in the workspace.

pub mod alert_event;
pub mod case_point;
pub mod cluster;
pub mod degradation_event;
pub mod filter;
pub mod geo_point;
pub mod geocode;
pub mod grid;
pub mod notification;
pub mod push;
pub mod risk_level;
pub mod severity;
pub mod zone;

pub use alert_event::{AlertChannel, AlertEvent, DeliveryState, SkipReason};
pub use case_point::CasePoint;
pub use cluster::{Cluster, ClusterResult, ClusterSeverity, TimeRange};
pub use degradation_event::DegradationEvent;
pub use filter::CaseFilter;
pub use geo_point::{Bounds, GeoPoint};
pub use geocode::{GeocodeFragment, ReverseGeocodeResult};
pub use grid::{GridCell, GridResult, GridStats};
pub use notification::{NotificationKind, NotificationRecord};
pub use push::{MulticastOutcome, PushErrorKind, PushFailure, PushPayload};
pub use risk_level::RiskLevel;
pub use severity::Severity;
pub use zone::Zone;
