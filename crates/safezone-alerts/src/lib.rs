//! # safezone-alerts
//!
//! Alert fan-out. Zone-entry alerts go to one device, broadcasts are split
//! into provider-sized batches sent in parallel, announcements go to a
//! topic. Push failures are classified and recorded on the event; an
//! in-app notification record is written for every attempt.

pub mod batch;
pub mod cooldown;
pub mod dispatcher;
pub mod fcm;
pub mod templates;

pub use batch::BatchResult;
pub use cooldown::ZoneEntryCooldown;
pub use dispatcher::AlertDispatcher;
pub use fcm::FcmChannel;
