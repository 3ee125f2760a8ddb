//! Span definitions per operation.

/// Create a grid aggregation span.
#[macro_export]
macro_rules! grid_span {
    ($cell_size:expr) => {
        tracing::info_span!("safezone.grid", cell_size_deg = $cell_size)
    };
}

/// Create a clustering span.
#[macro_export]
macro_rules! cluster_span {
    ($eps:expr) => {
        tracing::info_span!("safezone.cluster", eps_deg = $eps)
    };
}

/// Create a zone check span.
#[macro_export]
macro_rules! zone_check_span {
    ($user_id:expr) => {
        tracing::info_span!("safezone.zone_check", user_id = ?$user_id)
    };
}

/// Create a broadcast span.
#[macro_export]
macro_rules! broadcast_span {
    ($audience:expr) => {
        tracing::info_span!("safezone.broadcast", audience = $audience)
    };
}

pub mod names {
    pub const GRID: &str = "safezone.grid";
    pub const CLUSTER: &str = "safezone.cluster";
    pub const ZONE_CHECK: &str = "safezone.zone_check";
    pub const BROADCAST: &str = "safezone.broadcast";
}
