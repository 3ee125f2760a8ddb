pub mod nominatim;
pub mod zone_lookup;
