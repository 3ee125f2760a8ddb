//! Localized alert texts.

use std::collections::BTreeMap;

use safezone_core::config::Locale;
use safezone_core::models::{PushPayload, RiskLevel, Zone};

pub fn risk_emoji(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "🟡",
        RiskLevel::Medium => "🟠",
        RiskLevel::High => "🔴",
        RiskLevel::Critical => "⛔",
    }
}

pub fn risk_text(level: RiskLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::Vi, RiskLevel::Low) => "Thấp",
        (Locale::Vi, RiskLevel::Medium) => "Trung bình",
        (Locale::Vi, RiskLevel::High) => "Cao",
        (Locale::Vi, RiskLevel::Critical) => "Rất cao",
        (Locale::En, RiskLevel::Low) => "Low",
        (Locale::En, RiskLevel::Medium) => "Medium",
        (Locale::En, RiskLevel::High) => "High",
        (Locale::En, RiskLevel::Critical) => "Very high",
    }
}

fn zone_data(zone: &Zone, kind: &str, action: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("type".to_string(), kind.to_string()),
        ("zoneId".to_string(), zone.id.clone()),
        ("zoneName".to_string(), zone.name.clone()),
        ("diseaseType".to_string(), zone.disease_type.clone()),
        ("riskLevel".to_string(), zone.risk_level.as_str().to_string()),
        ("action".to_string(), action.to_string()),
    ])
}

/// High-priority alert for a user who is inside `zone`.
pub fn zone_entry(zone: &Zone, locale: Locale) -> PushPayload {
    let emoji = risk_emoji(zone.risk_level);
    let risk = risk_text(zone.risk_level, locale);
    let (title, body) = match locale {
        Locale::Vi => (
            format!("{emoji} CẢNH BÁO: Bạn đang trong vùng dịch!"),
            format!(
                "Khu vực: {}\nLoại bệnh: {}\nMức độ nguy hiểm: {risk}",
                zone.name, zone.disease_type
            ),
        ),
        Locale::En => (
            format!("{emoji} ALERT: You are inside an epidemic zone!"),
            format!(
                "Area: {}\nDisease: {}\nRisk level: {risk}",
                zone.name, zone.disease_type
            ),
        ),
    };
    PushPayload {
        title,
        body,
        data: zone_data(zone, "zone_entry", "open_zone_detail"),
    }
}

/// Outbreak alert for every user.
pub fn outbreak(zone: &Zone, locale: Locale) -> PushPayload {
    let risk = risk_text(zone.risk_level, locale);
    let (title, body) = match locale {
        Locale::Vi => (
            format!("⚠️ Cảnh báo dịch bệnh: {}", zone.disease_type),
            format!(
                "Phát hiện ổ dịch mới tại {}. Mức độ: {risk}. Hãy cẩn thận khi di chuyển qua khu vực này.",
                zone.name
            ),
        ),
        Locale::En => (
            format!("⚠️ Epidemic alert: {}", zone.disease_type),
            format!(
                "New outbreak detected in {}. Risk level: {risk}. Take care when passing through this area.",
                zone.name
            ),
        ),
    };
    PushPayload {
        title,
        body,
        data: zone_data(zone, "epidemic_alert", "open_map"),
    }
}

/// System announcement. Caller data may override `type`.
pub fn announcement(title: &str, body: &str, data: BTreeMap<String, String>) -> PushPayload {
    let mut merged = BTreeMap::from([("type".to_string(), "system".to_string())]);
    merged.extend(data);
    PushPayload {
        title: format!("📢 {title}"),
        body: body.to_string(),
        data: merged,
    }
}
