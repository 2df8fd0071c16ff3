//! Core data types for the weather policy service.
//!
//! This module defines the shared domain model imported by all other
//! modules. It contains no logic beyond trivial accessors, no I/O, and no
//! mutable state; only types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Weather variables
// ---------------------------------------------------------------------------

/// The closed set of weather variables a policy can be keyed on.
///
/// Every variant has exactly one configuration entry in
/// `variables::VARIABLE_REGISTRY` and belongs to exactly one variable
/// group. Adding a variant without a registry entry is a configuration
/// error caught by `verify::assert_registry_integrity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherVariable {
    HeatIndex,
    AirQuality,
    WindSpeed,
    WindGust,
    Precipitation,
    Snow,
    Lightning,
    Temperature,
    WindChill,
    FeelsLikeCold,
    Humidity,
    Visibility,
    NwsAlerts,
}

impl WeatherVariable {
    /// All variables, in registry order.
    pub const ALL: [WeatherVariable; 13] = [
        WeatherVariable::Lightning,
        WeatherVariable::WindSpeed,
        WeatherVariable::WindGust,
        WeatherVariable::HeatIndex,
        WeatherVariable::Temperature,
        WeatherVariable::WindChill,
        WeatherVariable::FeelsLikeCold,
        WeatherVariable::AirQuality,
        WeatherVariable::Visibility,
        WeatherVariable::Humidity,
        WeatherVariable::Precipitation,
        WeatherVariable::Snow,
        WeatherVariable::NwsAlerts,
    ];

    /// Stable string identifier, used for filtering and serialization.
    pub fn id(&self) -> &'static str {
        match self {
            WeatherVariable::HeatIndex => "heat_index",
            WeatherVariable::AirQuality => "air_quality",
            WeatherVariable::WindSpeed => "wind_speed",
            WeatherVariable::WindGust => "wind_gust",
            WeatherVariable::Precipitation => "precipitation",
            WeatherVariable::Snow => "snow",
            WeatherVariable::Lightning => "lightning",
            WeatherVariable::Temperature => "temperature",
            WeatherVariable::WindChill => "wind_chill",
            WeatherVariable::FeelsLikeCold => "feels_like_cold",
            WeatherVariable::Humidity => "humidity",
            WeatherVariable::Visibility => "visibility",
            WeatherVariable::NwsAlerts => "nws_alerts",
        }
    }
}

impl std::fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Risk levels
// ---------------------------------------------------------------------------

/// Severity ladder for thresholds, in ascending order.
///
/// The derived `Ord` follows declaration order:
///   low < medium < high < extreme
///
/// Slot N of the threshold editor corresponds to the Nth risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    /// Maps a 1-based editor slot number to its risk level.
    /// Returns `None` for slots outside 1..=4.
    pub fn for_slot(slot: usize) -> Option<RiskLevel> {
        match slot {
            1 => Some(RiskLevel::Low),
            2 => Some(RiskLevel::Medium),
            3 => Some(RiskLevel::High),
            4 => Some(RiskLevel::Extreme),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Extreme => write!(f, "extreme"),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy types
// ---------------------------------------------------------------------------

/// A single severity threshold within a policy.
///
/// `value` is the trigger point in the owning variable's unit. It is
/// bounded by the variable's `[min_value, max_value]` at entry time only;
/// it is not re-validated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyThreshold {
    pub id: Uuid,
    pub value: f64,
    pub risk_level: RiskLevel,
    pub alert_message: String,
    /// Display color as a hex string, defaulted per slot and independently
    /// editable afterwards.
    pub color: String,
    /// Minutes to wait after conditions clear before standing down.
    pub all_clear_time: Option<u32>,
    /// Threshold-specific stand-down text, overriding the policy default.
    pub all_clear_message: Option<String>,
}

/// A complete weather safety policy.
///
/// Policies are held in `store::PolicyStore` in insertion order and are
/// never deleted. `created_at` is set once; `updated_at` is refreshed by
/// every mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: Uuid,
    pub name: String,
    pub weather_variable: WeatherVariable,
    pub is_active: bool,
    /// Free-text location labels, ordered, not deduplicated.
    pub locations: Vec<String>,
    /// Free-text audience labels, ordered, not deduplicated.
    pub user_groups: Vec<String>,
    /// Between 0 and 4 entries, kept sorted ascending by value on entry.
    pub thresholds: Vec<PolicyThreshold>,
    /// Policy-level default stand-down text.
    pub all_clear_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when validating or committing a policy.
#[derive(Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The draft's name is empty; save refused.
    EmptyName,
    /// The draft has no weather variable selected; save refused.
    NoVariableSelected,
    /// No policy with the given id exists in the store.
    UnknownPolicy(Uuid),
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyError::EmptyName => write!(f, "Policy name must not be empty"),
            PolicyError::NoVariableSelected => write!(f, "No weather variable selected"),
            PolicyError::UnknownPolicy(id) => write!(f, "Unknown policy id: {}", id),
        }
    }
}

impl std::error::Error for PolicyError {}
