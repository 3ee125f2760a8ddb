mod geocoder;
mod notification_store;
mod point_store;
mod push_channel;

pub use geocoder::IGeocoder;
pub use notification_store::INotificationStore;
pub use point_store::IPointStore;
pub use push_channel::IPushChannel;
