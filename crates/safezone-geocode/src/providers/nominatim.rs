//! Nominatim (OpenStreetMap) reverse geocoder.
//!
//! The HTTP call needs the `nominatim` feature. Without it, or with the
//! geocoder disabled in config, every lookup fails with
//! `GeocodeError::Disabled` and the chain falls through.

use serde::Deserialize;

use safezone_core::config::GeocoderConfig;
use safezone_core::errors::{GeocodeError, SafeZoneResult};
use safezone_core::models::{GeoPoint, GeocodeFragment};
use safezone_core::traits::IGeocoder;

#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    village: Option<String>,
    suburb: Option<String>,
    quarter: Option<String>,
    hamlet: Option<String>,
    county: Option<String>,
    city_district: Option<String>,
    town: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
    province: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NominatimResponse {
    display_name: Option<String>,
    #[serde(default)]
    address: NominatimAddress,
}

fn first_of(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .cloned()
}

/// Map a Nominatim response onto Vietnamese administrative levels.
pub fn fragment_from_response(resp: NominatimResponse) -> GeocodeFragment {
    let a = &resp.address;
    GeocodeFragment {
        commune: first_of(&[&a.village, &a.suburb, &a.quarter, &a.hamlet]),
        district: first_of(&[&a.county, &a.city_district, &a.town, &a.municipality]),
        province: first_of(&[&a.state, &a.province, &a.city]),
        display_name: resp.display_name.filter(|s| !s.trim().is_empty()),
        zone_id: None,
    }
}

/// Parse a raw Nominatim JSON body.
pub fn parse_response(body: &str) -> SafeZoneResult<GeocodeFragment> {
    let resp: NominatimResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::MalformedResponse {
            reason: e.to_string(),
        })?;
    Ok(fragment_from_response(resp))
}

pub struct NominatimGeocoder {
    config: GeocoderConfig,
    #[cfg(feature = "nominatim")]
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> SafeZoneResult<Self> {
        #[cfg(feature = "nominatim")]
        {
            let client = reqwest::blocking::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.clone())
                .gzip(true)
                .build()
                .map_err(|e| GeocodeError::RequestFailed {
                    reason: e.to_string(),
                })?;
            Ok(Self { config, client })
        }

        #[cfg(not(feature = "nominatim"))]
        {
            Ok(Self { config })
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled && cfg!(feature = "nominatim")
    }

    #[cfg(feature = "nominatim")]
    fn fetch(&self, point: GeoPoint) -> SafeZoneResult<GeocodeFragment> {
        let resp = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("format", "json".to_string()),
                ("lat", point.lat.to_string()),
                ("lon", point.lon.to_string()),
                ("accept-language", self.config.accept_language.clone()),
            ])
            .send()
            .map_err(|e| GeocodeError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::RequestFailed {
                reason: format!("HTTP {status}"),
            }
            .into());
        }
        let body = resp.text().map_err(|e| GeocodeError::RequestFailed {
            reason: e.to_string(),
        })?;
        parse_response(&body)
    }
}

impl IGeocoder for NominatimGeocoder {
    fn reverse(&self, _point: GeoPoint) -> SafeZoneResult<Option<GeocodeFragment>> {
        if !self.config.enabled {
            return Err(GeocodeError::Disabled {
                reason: "geocoder.enabled = false".into(),
            }
            .into());
        }

        #[cfg(feature = "nominatim")]
        {
            self.fetch(_point).map(Some)
        }

        #[cfg(not(feature = "nominatim"))]
        {
            Err(GeocodeError::Disabled {
                reason: "nominatim feature not enabled".into(),
            }
            .into())
        }
    }

    fn name(&self) -> &str {
        "nominatim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vietnamese_levels() {
        let body = r#"{
            "display_name": "Bến Nghé, Quận 1, Thành phố Hồ Chí Minh, Việt Nam",
            "address": {
                "suburb": "Phường Bến Nghé",
                "city_district": "Quận 1",
                "city": "Thành phố Hồ Chí Minh"
            }
        }"#;
        let f = parse_response(body).unwrap();
        assert_eq!(f.commune.as_deref(), Some("Phường Bến Nghé"));
        assert_eq!(f.district.as_deref(), Some("Quận 1"));
        assert_eq!(f.province.as_deref(), Some("Thành phố Hồ Chí Minh"));
    }

    #[test]
    fn prefers_village_over_suburb_and_state_over_city() {
        let body = r#"{"address": {
            "village": "Xã A", "suburb": "B",
            "county": "Huyện C", "town": "D",
            "state": "Tỉnh E", "city": "F"
        }}"#;
        let f = parse_response(body).unwrap();
        assert_eq!(f.commune.as_deref(), Some("Xã A"));
        assert_eq!(f.district.as_deref(), Some("Huyện C"));
        assert_eq!(f.province.as_deref(), Some("Tỉnh E"));
        assert!(f.display_name.is_none());
    }

    #[test]
    fn missing_address_yields_empty_fragment() {
        let f = parse_response(r#"{"display_name": "Biển Đông"}"#).unwrap();
        assert!(f.commune.is_none() && f.district.is_none() && f.province.is_none());
        assert_eq!(f.display_name.as_deref(), Some("Biển Đông"));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_response("<html>").is_err());
    }

    #[test]
    fn disabled_geocoder_fails_fast() {
        let g = NominatimGeocoder::new(GeocoderConfig::default()).unwrap();
        assert!(!g.is_enabled());
        assert!(g.reverse(GeoPoint::new(10.0, 106.0)).is_err());
    }
}
