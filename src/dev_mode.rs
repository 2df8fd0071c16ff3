//! Development mode utilities for seeding the policy store.
//!
//! When no real user data exists, use this module to populate the
//! dashboard with a realistic set of sample policies for testing and
//! development. Timestamps are expressed as day offsets from `now` so
//! the seeded list always looks recently edited.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::model::{Policy, PolicyThreshold, RiskLevel, WeatherVariable};

fn threshold(value: f64, risk_level: RiskLevel, alert_message: &str, color: &str) -> PolicyThreshold {
    PolicyThreshold {
        id: Uuid::new_v4(),
        value,
        risk_level,
        alert_message: alert_message.to_string(),
        color: color.to_string(),
        all_clear_time: None,
        all_clear_message: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the stock sample policies with timestamps relative to `now`.
///
/// Each call mints fresh identifiers, so two seeded stores never share
/// policy or threshold ids.
pub fn sample_policies_at(now: DateTime<Utc>) -> Vec<Policy> {
    vec![
        Policy {
            id: Uuid::new_v4(),
            name: "Campus Heat Safety".to_string(),
            weather_variable: WeatherVariable::HeatIndex,
            is_active: true,
            locations: strings(&["Main Campus", "Athletic Fields", "Outdoor Events"]),
            user_groups: strings(&["Students", "Faculty", "Maintenance Staff"]),
            thresholds: vec![
                threshold(
                    85.0,
                    RiskLevel::Low,
                    "Heat advisory: Stay hydrated and take breaks in shade",
                    "#10B981",
                ),
                threshold(
                    95.0,
                    RiskLevel::Medium,
                    "Heat warning: Limit outdoor activities and increase water breaks",
                    "#F59E0B",
                ),
                threshold(
                    105.0,
                    RiskLevel::High,
                    "Extreme heat: Cancel outdoor activities and move indoors",
                    "#EF4444",
                ),
            ],
            all_clear_message:
                "Heat conditions have returned to safe levels. Normal activities may resume."
                    .to_string(),
            created_at: now - Duration::days(5),
            updated_at: now,
        },
        Policy {
            id: Uuid::new_v4(),
            name: "Lightning Safety Protocol".to_string(),
            weather_variable: WeatherVariable::Lightning,
            is_active: true,
            locations: strings(&["Sports Fields", "Outdoor Events", "Construction Sites"]),
            user_groups: strings(&["Athletes", "Event Staff", "Construction Workers"]),
            thresholds: vec![
                threshold(
                    5.0,
                    RiskLevel::High,
                    "Lightning within 5 miles - evacuate to safe indoor locations immediately",
                    "#EF4444",
                ),
                threshold(
                    10.0,
                    RiskLevel::Medium,
                    "Lightning detected within 10 miles - prepare to move indoors",
                    "#F59E0B",
                ),
            ],
            all_clear_message:
                "Lightning threat has passed. Wait 30 minutes after last strike before resuming outdoor activities."
                    .to_string(),
            created_at: now - Duration::days(10),
            updated_at: now - Duration::days(2),
        },
        Policy {
            id: Uuid::new_v4(),
            name: "Air Quality Monitoring".to_string(),
            weather_variable: WeatherVariable::AirQuality,
            is_active: false,
            locations: strings(&["Downtown Office", "Warehouse District"]),
            user_groups: strings(&["Office Workers", "Delivery Staff"]),
            thresholds: vec![
                threshold(
                    100.0,
                    RiskLevel::Medium,
                    "Air quality unhealthy for sensitive groups - limit outdoor exposure",
                    "#F59E0B",
                ),
                threshold(
                    150.0,
                    RiskLevel::High,
                    "Unhealthy air quality - avoid outdoor activities",
                    "#EF4444",
                ),
            ],
            all_clear_message: "Air quality has improved to acceptable levels.".to_string(),
            created_at: now - Duration::days(15),
            updated_at: now - Duration::days(8),
        },
        Policy {
            id: Uuid::new_v4(),
            name: "High Wind Operations".to_string(),
            weather_variable: WeatherVariable::WindSpeed,
            is_active: true,
            locations: strings(&["Construction Sites", "Loading Docks", "Outdoor Events"]),
            user_groups: strings(&["Construction Workers", "Event Staff", "Logistics Team"]),
            thresholds: vec![
                threshold(
                    25.0,
                    RiskLevel::Medium,
                    "Strong winds detected - secure loose materials and equipment",
                    "#F59E0B",
                ),
                threshold(
                    40.0,
                    RiskLevel::High,
                    "High winds - halt crane operations and outdoor work",
                    "#EF4444",
                ),
            ],
            all_clear_message:
                "Wind conditions have calmed. Normal operations may resume with caution."
                    .to_string(),
            created_at: now - Duration::days(12),
            updated_at: now - Duration::days(4),
        },
    ]
}

/// Builds the stock sample policies anchored to the current time.
pub fn sample_policies() -> Vec<Policy> {
    sample_policies_at(Utc::now())
}
