use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use safezone_alerts::{AlertDispatcher, BatchResult, FcmChannel};
use safezone_cluster::ClusterEngine;
use safezone_core::config::SafeZoneConfig;
use safezone_core::errors::{SafeZoneError, SafeZoneResult};
use safezone_core::models::{
    AlertEvent, Bounds, CaseFilter, ClusterResult, GeoPoint, GridResult, NotificationKind,
    PushPayload, ReverseGeocodeResult, SkipReason, Zone,
};
use safezone_core::traits::{IGeocoder, INotificationStore, IPointStore, IPushChannel};
use safezone_geocode::{GeocodeChain, NominatimGeocoder, ZoneLookupGeocoder};
use safezone_grid::stats::{self, CaseStats};
use safezone_grid::GridAggregator;
use safezone_observability::{events, DegradationTracker, TrackedDegradation};
use safezone_zones::{zone_stats, ZoneMatcher, ZoneStats};

use crate::results::{LocationAlert, ZoneCheck};

/// Façade over the aggregation, clustering, matching, geocoding and alert
/// engines. Holds no per-request state; safe to share across threads.
pub struct SafeZoneEngine {
    config: SafeZoneConfig,
    points: Arc<dyn IPointStore>,
    grid: GridAggregator,
    clusters: ClusterEngine,
    matcher: ZoneMatcher,
    dispatcher: AlertDispatcher,
    geocoder: GeocodeChain,
    degradations: Mutex<DegradationTracker>,
}

impl SafeZoneEngine {
    /// Build the engine around injected collaborators. The push channel is
    /// shared by every dispatch for the engine's lifetime.
    pub fn new(
        config: SafeZoneConfig,
        points: Arc<dyn IPointStore>,
        notifications: Arc<dyn INotificationStore>,
        push: Arc<dyn IPushChannel>,
    ) -> SafeZoneResult<Self> {
        config.validate()?;
        let dispatcher = AlertDispatcher::new(config.alerts.clone(), push, notifications)?;

        let mut geocoder = GeocodeChain::new();
        geocoder.push(Box::new(ZoneLookupGeocoder::new(points.clone())));
        if config.geocoder.enabled {
            geocoder.push(Box::new(NominatimGeocoder::new(config.geocoder.clone())?));
        }

        info!(
            push_channel = dispatcher.channel_name(),
            geocoder_stages = geocoder.len(),
            "safezone engine initialized"
        );

        Ok(Self {
            config,
            points,
            grid: GridAggregator::new(),
            clusters: ClusterEngine::new(),
            matcher: ZoneMatcher::new(),
            dispatcher,
            geocoder,
            degradations: Mutex::new(DegradationTracker::new()),
        })
    }

    /// Build the engine with the FCM channel described by `config.push`.
    pub fn with_fcm(
        config: SafeZoneConfig,
        points: Arc<dyn IPointStore>,
        notifications: Arc<dyn INotificationStore>,
    ) -> SafeZoneResult<Self> {
        let push = Arc::new(FcmChannel::new(config.push.clone())?);
        Self::new(config, points, notifications, push)
    }

    /// Append a geocoding stage after the built-in ones.
    pub fn push_geocoder(&mut self, stage: Box<dyn IGeocoder>) {
        self.geocoder.push(stage);
    }

    pub fn config(&self) -> &SafeZoneConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &AlertDispatcher {
        &self.dispatcher
    }

    // ---- density and clusters ----

    /// Grid density over the cases matching `filter`. `None` uses the
    /// configured default cell size.
    pub fn compute_grid_density(
        &self,
        filter: &CaseFilter,
        cell_size_deg: Option<f64>,
        bounds: Option<Bounds>,
    ) -> SafeZoneResult<GridResult> {
        let size = cell_size_deg.unwrap_or(self.config.grid.default_cell_size_deg);
        let _span = safezone_observability::grid_span!(size).entered();

        let points = self.points.list_points(filter)?;
        let result = self.grid.aggregate(&points, size, bounds)?;
        events::grid_computed(size, result.total_cells, result.stats.total_cases);
        Ok(result)
    }

    /// Clusters over the cases matching `filter`. `None` uses the
    /// configured default distance.
    pub fn compute_clusters(
        &self,
        filter: &CaseFilter,
        eps_deg: Option<f64>,
    ) -> SafeZoneResult<ClusterResult> {
        let eps = eps_deg.unwrap_or(self.config.cluster.default_eps_deg);
        let _span = safezone_observability::cluster_span!(eps).entered();

        let points = self.points.list_points(filter)?;
        let result = self.clusters.cluster(&points, eps)?;
        events::clusters_computed(eps, result.total_clusters, result.total_cases);
        Ok(result)
    }

    pub fn case_stats(&self, filter: &CaseFilter) -> SafeZoneResult<CaseStats> {
        self.case_stats_at(filter, Utc::now())
    }

    /// Case statistics with the comparison periods anchored at `now`.
    pub fn case_stats_at(&self, filter: &CaseFilter, now: DateTime<Utc>) -> SafeZoneResult<CaseStats> {
        let points = self.points.list_points(filter)?;
        Ok(stats::summarize(&points, now))
    }

    // ---- zones ----

    pub fn check_point_in_zones(&self, lat: f64, lon: f64) -> SafeZoneResult<ZoneCheck> {
        let zones = self.points.list_active_zones()?;
        let matched = self.matcher.find_containing(GeoPoint::new(lat, lon), &zones);
        events::zone_check_completed(lat, lon, matched.len());
        Ok(ZoneCheck::new(matched))
    }

    /// Zone check followed by a zone-entry alert for the highest-risk match.
    ///
    /// Push problems show up on the returned alert, never as an error.
    pub fn check_location_and_alert(
        &self,
        user_id: &str,
        lat: f64,
        lon: f64,
    ) -> SafeZoneResult<LocationAlert> {
        let _span = safezone_observability::zone_check_span!(user_id).entered();

        let ZoneCheck { in_zone, zones } = self.check_point_in_zones(lat, lon)?;
        if !in_zone {
            return Ok(LocationAlert {
                in_zone,
                zones,
                alert_sent: false,
                alert: None,
            });
        }

        let alert = self.dispatcher.dispatch_zone_entry(user_id, &zones)?;
        Ok(LocationAlert {
            in_zone,
            zones,
            alert_sent: alert.skip_reason != Some(SkipReason::Cooldown),
            alert: Some(alert),
        })
    }

    /// Active zones whose centre is within `radius_km` of the coordinate.
    pub fn find_nearby_zones(
        &self,
        lat: f64,
        lon: f64,
        radius_km: Option<f64>,
    ) -> SafeZoneResult<Vec<Zone>> {
        let radius = radius_km.unwrap_or(self.config.zones.nearby_default_radius_km);
        if !radius.is_finite() || radius < 0.0 {
            return Err(SafeZoneError::invalid_parameter(
                "radius_km",
                format!("must be a non-negative distance, got {radius}"),
            ));
        }
        let zones = self.points.list_active_zones()?;
        Ok(self
            .matcher
            .find_nearby(GeoPoint::new(lat, lon), &zones, radius))
    }

    pub fn zone(&self, id: &str) -> SafeZoneResult<Zone> {
        self.points
            .get_zone(id)?
            .ok_or_else(|| SafeZoneError::ZoneNotFound { id: id.to_string() })
    }

    /// The zone with `case_count` applied and its risk level re-derived.
    /// Persisting the returned zone is the caller's job.
    pub fn recount_zone(&self, id: &str, case_count: u32) -> SafeZoneResult<Zone> {
        let zone = self.zone(id)?;
        let updated = self.matcher.recount(&zone, case_count);
        if updated.risk_level != zone.risk_level {
            info!(
                zone_id = %id,
                from = zone.risk_level.as_str(),
                to = updated.risk_level.as_str(),
                case_count,
                "zone risk level changed"
            );
        }
        Ok(updated)
    }

    pub fn zone_stats(&self) -> SafeZoneResult<ZoneStats> {
        Ok(zone_stats(&self.points.list_zones()?))
    }

    // ---- geocoding ----

    /// Human-readable address for a coordinate. Never fails; the last
    /// resort is the coordinate itself.
    pub fn reverse_geocode(&self, lat: f64, lon: f64) -> ReverseGeocodeResult {
        let outcome = self.geocoder.resolve(GeoPoint::new(lat, lon));
        if let Ok(mut tracker) = self.degradations.lock() {
            if outcome.degradations.is_empty() {
                tracker.mark_recovered("geocode");
            } else {
                tracker.extend(outcome.degradations);
            }
        }
        outcome.result
    }

    pub fn describe_case_location(&self, case_id: &str) -> SafeZoneResult<ReverseGeocodeResult> {
        let case = self
            .points
            .get_case(case_id)?
            .ok_or_else(|| SafeZoneError::CaseNotFound {
                id: case_id.to_string(),
            })?;
        Ok(self.reverse_geocode(case.lat, case.lon))
    }

    pub fn describe_zone_location(&self, zone_id: &str) -> SafeZoneResult<ReverseGeocodeResult> {
        let zone = self.zone(zone_id)?;
        Ok(self.reverse_geocode(zone.latitude(), zone.longitude()))
    }

    /// Snapshot of recorded degradations, oldest first. Bounded to the
    /// tracker's capacity.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.degradations
            .lock()
            .map(|t| t.events().to_vec())
            .unwrap_or_default()
    }

    // ---- announcements ----

    pub fn announce_system(
        &self,
        title: &str,
        body: &str,
        data: BTreeMap<String, String>,
    ) -> SafeZoneResult<AlertEvent> {
        self.dispatcher.announce_system(title, body, data)
    }

    pub fn broadcast_outbreak(&self, zone_id: &str) -> SafeZoneResult<AlertEvent> {
        let zone = self.zone(zone_id)?;
        debug!(zone_id, risk = zone.risk_level.as_str(), "broadcasting outbreak");
        self.dispatcher.broadcast_outbreak(&zone)
    }

    pub fn broadcast(
        &self,
        payload: PushPayload,
        tokens: &[String],
        kind: NotificationKind,
    ) -> SafeZoneResult<BatchResult> {
        let _span = safezone_observability::broadcast_span!(tokens.len()).entered();
        self.dispatcher.broadcast(payload, tokens, kind)
    }
}
