//! Weather variable registry.
//!
//! Defines the canonical catalog of weather variables a policy can be keyed
//! on, along with their units, input bounds, and default threshold
//! templates. This is the single source of truth for variable metadata;
//! all other modules should reference configuration from here rather than
//! hardcoding units or bounds.
//!
//! The registry is a read-only static table. Every `WeatherVariable`
//! variant has exactly one entry and belongs to exactly one group; a
//! violation is a fatal configuration error caught at startup by
//! `verify::assert_registry_integrity`, never a recoverable runtime
//! condition.

use crate::model::{RiskLevel, WeatherVariable};

// ---------------------------------------------------------------------------
// Registry entry types
// ---------------------------------------------------------------------------

/// A default threshold template applied when a variable is selected.
pub struct ThresholdTemplate {
    pub value: f64,
    pub risk_level: RiskLevel,
    pub alert_message: &'static str,
    pub color: &'static str,
}

/// Configuration for a single weather variable.
pub struct WeatherVariableConfig {
    pub variable: WeatherVariable,
    /// Human-readable label for pickers.
    pub label: &'static str,
    /// Unit suffix shown next to value inputs.
    pub unit: &'static str,
    /// Icon identifier. Resolution to a glyph is a presentation concern.
    pub icon: &'static str,
    /// Lower bound for threshold value inputs.
    pub min_value: f64,
    /// Upper bound for threshold value inputs.
    pub max_value: f64,
    /// Suggested thresholds, ascending by severity. At most 4.
    pub default_thresholds: &'static [ThresholdTemplate],
}

/// A named partition of the variable catalog, used to structure pickers.
pub struct VariableGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub members: &'static [WeatherVariable],
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All supported weather variables with their configuration, grouped
/// roughly by hazard family (lightning, wind, heat, cold, air, moisture,
/// advisories).
pub static VARIABLE_REGISTRY: &[WeatherVariableConfig] = &[
    WeatherVariableConfig {
        variable: WeatherVariable::Lightning,
        label: "Lightning",
        unit: "miles",
        icon: "zap",
        min_value: 0.0,
        max_value: 50.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 10.0,
                risk_level: RiskLevel::Low,
                alert_message: "Lightning detected within 10 miles",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 5.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Lightning within 5 miles - move indoors",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 2.0,
                risk_level: RiskLevel::High,
                alert_message: "Lightning within 2 miles - seek immediate shelter",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 1.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Lightning strike imminent - take cover now",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::WindSpeed,
        label: "Wind Speed",
        unit: "mph",
        icon: "wind",
        min_value: 0.0,
        max_value: 100.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 15.0,
                risk_level: RiskLevel::Low,
                alert_message: "Breezy conditions detected",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 25.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Strong winds detected",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 40.0,
                risk_level: RiskLevel::High,
                alert_message: "High winds - exercise caution",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 60.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Dangerous winds - seek shelter",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::WindGust,
        label: "Wind Gust",
        unit: "mph",
        icon: "wind",
        min_value: 0.0,
        max_value: 120.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 20.0,
                risk_level: RiskLevel::Low,
                alert_message: "Wind gusts detected",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 35.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Strong wind gusts",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 50.0,
                risk_level: RiskLevel::High,
                alert_message: "Dangerous wind gusts",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 75.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme wind gusts - seek shelter",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::HeatIndex,
        label: "Heat Index",
        unit: "°F",
        icon: "thermometer",
        min_value: 60.0,
        max_value: 130.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 80.0,
                risk_level: RiskLevel::Low,
                alert_message: "Caution: Heat index reaching 80°F",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 90.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Warning: Heat index reaching 90°F",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 100.0,
                risk_level: RiskLevel::High,
                alert_message: "Danger: Heat index reaching 100°F",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 110.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme Danger: Heat index reaching 110°F",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::Temperature,
        label: "Temperature",
        unit: "°F",
        icon: "thermometer",
        min_value: -20.0,
        max_value: 120.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 85.0,
                risk_level: RiskLevel::Low,
                alert_message: "High temperature alert",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 95.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Very high temperature",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 105.0,
                risk_level: RiskLevel::High,
                alert_message: "Dangerous heat",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 115.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme heat warning",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::WindChill,
        label: "Wind Chill",
        unit: "°F",
        icon: "snowflake",
        min_value: -50.0,
        max_value: 50.0,
        // Cold hazards trigger as values fall, so defaults descend in value
        // while ascending in severity.
        default_thresholds: &[
            ThresholdTemplate {
                value: 32.0,
                risk_level: RiskLevel::Low,
                alert_message: "Freezing conditions",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 15.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Cold weather advisory",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: -5.0,
                risk_level: RiskLevel::High,
                alert_message: "Dangerous cold conditions",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: -20.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme cold warning",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::FeelsLikeCold,
        label: "Feels Like (Cold)",
        unit: "°F",
        icon: "snowflake",
        min_value: -50.0,
        max_value: 50.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 32.0,
                risk_level: RiskLevel::Low,
                alert_message: "Feels like freezing",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 20.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Feels dangerously cold",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 0.0,
                risk_level: RiskLevel::High,
                alert_message: "Feels extremely cold",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: -15.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Life-threatening cold",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::AirQuality,
        label: "Air Quality Index",
        unit: "AQI",
        icon: "gauge",
        min_value: 0.0,
        max_value: 500.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 50.0,
                risk_level: RiskLevel::Low,
                alert_message: "Air quality is moderate",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 100.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Air quality is unhealthy for sensitive groups",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 150.0,
                risk_level: RiskLevel::High,
                alert_message: "Air quality is unhealthy",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 200.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Air quality is very unhealthy",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::Visibility,
        label: "Visibility",
        unit: "miles",
        icon: "eye",
        min_value: 0.0,
        max_value: 10.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 5.0,
                risk_level: RiskLevel::Low,
                alert_message: "Reduced visibility",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 2.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Poor visibility conditions",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 1.0,
                risk_level: RiskLevel::High,
                alert_message: "Very poor visibility",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 0.5,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extremely poor visibility",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::Humidity,
        label: "Humidity",
        unit: "%",
        icon: "droplets",
        min_value: 0.0,
        max_value: 100.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 70.0,
                risk_level: RiskLevel::Low,
                alert_message: "High humidity conditions",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 80.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Very high humidity",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 90.0,
                risk_level: RiskLevel::High,
                alert_message: "Dangerous humidity levels",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 95.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme humidity warning",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::Precipitation,
        label: "Precipitation",
        unit: "in/hr",
        icon: "droplets",
        min_value: 0.0,
        max_value: 5.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 0.1,
                risk_level: RiskLevel::Low,
                alert_message: "Light rain detected",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 0.5,
                risk_level: RiskLevel::Medium,
                alert_message: "Moderate rain detected",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 1.0,
                risk_level: RiskLevel::High,
                alert_message: "Heavy rain - flooding possible",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 2.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme rainfall - seek higher ground",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::Snow,
        label: "Snow",
        unit: "in/hr",
        icon: "snowflake",
        min_value: 0.0,
        max_value: 10.0,
        default_thresholds: &[
            ThresholdTemplate {
                value: 0.5,
                risk_level: RiskLevel::Low,
                alert_message: "Light snow detected",
                color: "#10B981",
            },
            ThresholdTemplate {
                value: 1.0,
                risk_level: RiskLevel::Medium,
                alert_message: "Moderate snowfall",
                color: "#F59E0B",
            },
            ThresholdTemplate {
                value: 2.0,
                risk_level: RiskLevel::High,
                alert_message: "Heavy snow conditions",
                color: "#EF4444",
            },
            ThresholdTemplate {
                value: 4.0,
                risk_level: RiskLevel::Extreme,
                alert_message: "Extreme snowfall warning",
                color: "#7C2D12",
            },
        ],
    },
    WeatherVariableConfig {
        variable: WeatherVariable::NwsAlerts,
        label: "NWS Alerts",
        unit: "alert",
        icon: "alert-triangle",
        min_value: 0.0,
        max_value: 1.0,
        // Binary advisory signal. A single default at the high level.
        default_thresholds: &[ThresholdTemplate {
            value: 1.0,
            risk_level: RiskLevel::High,
            alert_message: "National Weather Service alert issued",
            color: "#EF4444",
        }],
    },
];

/// Partition of the catalog into picker groups. Each variable appears in
/// exactly one group.
pub static VARIABLE_GROUPS: &[VariableGroup] = &[
    VariableGroup {
        id: "lightning",
        label: "Lightning",
        members: &[WeatherVariable::Lightning],
    },
    VariableGroup {
        id: "wind",
        label: "Wind",
        members: &[WeatherVariable::WindSpeed, WeatherVariable::WindGust],
    },
    VariableGroup {
        id: "heat_stress",
        label: "Heat Stress",
        members: &[WeatherVariable::HeatIndex, WeatherVariable::Temperature],
    },
    VariableGroup {
        id: "cold_stress",
        label: "Cold Stress",
        members: &[WeatherVariable::WindChill, WeatherVariable::FeelsLikeCold],
    },
    VariableGroup {
        id: "air_quality",
        label: "Air Quality",
        members: &[WeatherVariable::AirQuality, WeatherVariable::Visibility],
    },
    VariableGroup {
        id: "humidity",
        label: "Humidity",
        members: &[WeatherVariable::Humidity],
    },
    VariableGroup {
        id: "precipitation",
        label: "Precipitation",
        members: &[WeatherVariable::Precipitation, WeatherVariable::Snow],
    },
    VariableGroup {
        id: "nws_alerts",
        label: "National Weather Service Alerts",
        members: &[WeatherVariable::NwsAlerts],
    },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Looks up a variable's configuration. Returns `None` if the registry has
/// no entry, which `verify::assert_registry_integrity` rules out at startup.
pub fn find_config(variable: WeatherVariable) -> Option<&'static WeatherVariableConfig> {
    VARIABLE_REGISTRY.iter().find(|c| c.variable == variable)
}

/// Looks up a variable's configuration by its string identifier.
/// Returns `None` for unknown identifiers.
pub fn find_config_by_id(id: &str) -> Option<&'static WeatherVariableConfig> {
    VARIABLE_REGISTRY.iter().find(|c| c.variable.id() == id)
}

/// Infallible configuration lookup.
///
/// Panics if the registry has no entry for `variable`. A missing entry is a
/// fatal configuration error, not a recoverable condition; call
/// `verify::assert_registry_integrity` at startup to surface it early.
pub fn config(variable: WeatherVariable) -> &'static WeatherVariableConfig {
    match find_config(variable) {
        Some(c) => c,
        None => panic!("no registry entry for weather variable '{}'", variable.id()),
    }
}

/// Looks up the group a variable belongs to. Returns `None` if the variable
/// is not a member of any group.
pub fn find_group(variable: WeatherVariable) -> Option<&'static VariableGroup> {
    VARIABLE_GROUPS.iter().find(|g| g.members.contains(&variable))
}

/// Infallible group lookup. Panics if the variable is ungrouped, which is a
/// fatal configuration error like a missing registry entry.
pub fn group_of(variable: WeatherVariable) -> &'static VariableGroup {
    match find_group(variable) {
        Some(g) => g,
        None => panic!("weather variable '{}' is not in any group", variable.id()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
