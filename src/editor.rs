//! Policy draft editing and the 4-slot threshold ladder.
//!
//! The editor presents four severity slots (1 = low through 4 = extreme).
//! Enabling a slot appends a defaulted threshold and re-sorts the draft's
//! threshold list ascending by value; disabling a slot removes the
//! threshold at that slot's array position. Field updates are in place and
//! do not re-sort, so the list can drift out of order between a value edit
//! and the next enable.
//!
//! Slot removal is positional: `disable_slot(n)` removes array position
//! n-1 of the (sorted) list, not the threshold whose risk level matches
//! slot n. After value edits have reordered the list, the removed entry
//! may carry a different risk level than the slot's own.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{Policy, PolicyError, PolicyThreshold, RiskLevel, WeatherVariable};
use crate::variables;

// ---------------------------------------------------------------------------
// Slot constants
// ---------------------------------------------------------------------------

/// Number of severity slots in the editor.
pub const SLOT_COUNT: usize = 4;

/// Default threshold color per slot: yellow, green, blue, red.
pub const SLOT_COLORS: [&str; SLOT_COUNT] = ["#FACC15", "#10B981", "#3B82F6", "#EF4444"];

// ---------------------------------------------------------------------------
// Field updates
// ---------------------------------------------------------------------------

/// A single-field edit applied to a threshold at a given array position.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdUpdate {
    Value(f64),
    AlertMessage(String),
    Color(String),
    AllClearTime(Option<u32>),
    AllClearMessage(Option<String>),
}

// ---------------------------------------------------------------------------
// Policy draft
// ---------------------------------------------------------------------------

/// Mutable editor state for one policy being created or edited.
///
/// A draft is not a `Policy`: it has no id or timestamps. Committing it is
/// the store's job (`PolicyStore::create` / `PolicyStore::update`), which
/// calls `validate` first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDraft {
    pub name: String,
    /// `None` models the editor state before any variable is chosen.
    pub variable: Option<WeatherVariable>,
    pub is_active: bool,
    pub locations: Vec<String>,
    pub user_groups: Vec<String>,
    pub thresholds: Vec<PolicyThreshold>,
    pub all_clear_message: String,
    /// Checkbox state per slot, index 0 = slot 1.
    pub enabled_slots: [bool; SLOT_COUNT],
}

impl PolicyDraft {
    /// A fresh draft with the standard defaults: unnamed, keyed on
    /// lightning, active, no thresholds.
    pub fn new() -> Self {
        PolicyDraft {
            name: String::new(),
            variable: Some(WeatherVariable::Lightning),
            is_active: true,
            locations: Vec::new(),
            user_groups: Vec::new(),
            thresholds: Vec::new(),
            all_clear_message: String::new(),
            enabled_slots: [false; SLOT_COUNT],
        }
    }

    /// A draft initialized from an existing policy for editing.
    ///
    /// Slot k is enabled for each occupied array position k-1, so a policy
    /// with two thresholds opens with slots 1 and 2 checked regardless of
    /// which risk levels those thresholds carry.
    pub fn from_policy(policy: &Policy) -> Self {
        let mut enabled_slots = [false; SLOT_COUNT];
        for index in 0..policy.thresholds.len().min(SLOT_COUNT) {
            enabled_slots[index] = true;
        }
        PolicyDraft {
            name: policy.name.clone(),
            variable: Some(policy.weather_variable),
            is_active: policy.is_active,
            locations: policy.locations.clone(),
            user_groups: policy.user_groups.clone(),
            thresholds: policy.thresholds.clone(),
            all_clear_message: policy.all_clear_message.clone(),
            enabled_slots,
        }
    }

    /// Replaces the governing weather variable and clears all thresholds
    /// and slot state. Existing thresholds never survive a variable change
    /// because their values are bounded by the old variable's range.
    pub fn select_variable(&mut self, variable: WeatherVariable) {
        self.variable = Some(variable);
        self.thresholds.clear();
        self.enabled_slots = [false; SLOT_COUNT];
    }

    /// Enables slot `slot` (1-based), appending a defaulted threshold and
    /// re-sorting the list ascending by value.
    ///
    /// The new threshold starts at the variable's minimum value with the
    /// slot's risk level, a "Level n alert" message, and the slot's palette
    /// color. The sort is stable, so equal values keep insertion order.
    /// Slots outside 1..=4 are a silent no-op.
    pub fn enable_slot(&mut self, slot: usize) {
        let Some(risk_level) = RiskLevel::for_slot(slot) else {
            return;
        };
        let value = self
            .variable
            .and_then(variables::find_config)
            .map(|c| c.min_value)
            .unwrap_or(0.0);
        self.thresholds.push(PolicyThreshold {
            id: Uuid::new_v4(),
            value,
            risk_level,
            alert_message: format!("Level {} alert", slot),
            color: SLOT_COLORS[slot - 1].to_string(),
            all_clear_time: None,
            all_clear_message: None,
        });
        self.thresholds.sort_by(|a, b| a.value.total_cmp(&b.value));
        self.enabled_slots[slot - 1] = true;
    }

    /// Disables slot `slot` (1-based), removing the threshold at array
    /// position slot-1. Positions past the end of the list, and slots
    /// outside 1..=4, are a silent no-op.
    pub fn disable_slot(&mut self, slot: usize) {
        if slot == 0 || slot > SLOT_COUNT {
            return;
        }
        self.enabled_slots[slot - 1] = false;
        if slot - 1 < self.thresholds.len() {
            self.thresholds.remove(slot - 1);
        }
    }

    /// Applies a single-field edit to the threshold at `index`. The list is
    /// NOT re-sorted, even when the value field changes ordering; the next
    /// `enable_slot` restores sorted order. An out-of-range index is a
    /// silent no-op.
    pub fn update_threshold(&mut self, index: usize, update: ThresholdUpdate) {
        let Some(threshold) = self.thresholds.get_mut(index) else {
            return;
        };
        match update {
            ThresholdUpdate::Value(value) => threshold.value = value,
            ThresholdUpdate::AlertMessage(message) => threshold.alert_message = message,
            ThresholdUpdate::Color(color) => threshold.color = color,
            ThresholdUpdate::AllClearTime(minutes) => threshold.all_clear_time = minutes,
            ThresholdUpdate::AllClearMessage(message) => threshold.all_clear_message = message,
        }
    }

    /// Checks the draft is committable and returns the selected variable.
    ///
    /// An empty name is refused before a missing variable, matching the
    /// order a user sees the form fields. Whitespace-only names pass; only
    /// the truly empty string is refused.
    pub fn validate(&self) -> Result<WeatherVariable, PolicyError> {
        if self.name.is_empty() {
            return Err(PolicyError::EmptyName);
        }
        self.variable.ok_or(PolicyError::NoVariableSelected)
    }

    /// Materializes the draft as a policy record with the given identity
    /// and timestamps. Callers go through the store, which supplies these.
    pub(crate) fn to_policy(
        &self,
        variable: WeatherVariable,
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Policy {
        Policy {
            id,
            name: self.name.clone(),
            weather_variable: variable,
            is_active: self.is_active,
            locations: self.locations.clone(),
            user_groups: self.user_groups.clone(),
            thresholds: self.thresholds.clone(),
            all_clear_message: self.all_clear_message.clone(),
            created_at,
            updated_at,
        }
    }
}

impl Default for PolicyDraft {
    fn default() -> Self {
        PolicyDraft::new()
    }
}

// ---------------------------------------------------------------------------
// Label parsing
// ---------------------------------------------------------------------------

/// Parses a comma-separated label field ("Main Campus, Athletic Fields")
/// into trimmed, non-empty labels. Order is preserved and duplicates are
/// kept.
pub fn parse_label_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft_for(variable: WeatherVariable) -> PolicyDraft {
        let mut draft = PolicyDraft::new();
        draft.select_variable(variable);
        draft
    }

    fn values(draft: &PolicyDraft) -> Vec<f64> {
        draft.thresholds.iter().map(|t| t.value).collect()
    }

    fn levels(draft: &PolicyDraft) -> Vec<RiskLevel> {
        draft.thresholds.iter().map(|t| t.risk_level).collect()
    }

    // --- Defaults -----------------------------------------------------------

    #[test]
    fn test_new_draft_defaults() {
        let draft = PolicyDraft::new();
        assert_eq!(draft.name, "");
        assert_eq!(draft.variable, Some(WeatherVariable::Lightning));
        assert!(draft.is_active, "new drafts default to active");
        assert!(draft.thresholds.is_empty());
        assert_eq!(draft.enabled_slots, [false; SLOT_COUNT]);
    }

    #[test]
    fn test_enable_slot_applies_slot_defaults() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);

        assert_eq!(draft.thresholds.len(), 1);
        let threshold = &draft.thresholds[0];
        assert_eq!(threshold.value, 0.0, "wind_speed minimum is 0");
        assert_eq!(threshold.risk_level, RiskLevel::Low);
        assert_eq!(threshold.alert_message, "Level 1 alert");
        assert_eq!(threshold.color, SLOT_COLORS[0]);
        assert_eq!(threshold.all_clear_time, None);
        assert!(draft.enabled_slots[0]);
    }

    #[test]
    fn test_enable_slot_uses_variable_minimum() {
        // heat_index inputs start at 60, not 0.
        let mut draft = draft_for(WeatherVariable::HeatIndex);
        draft.enable_slot(2);
        assert_eq!(draft.thresholds[0].value, 60.0);
        assert_eq!(draft.thresholds[0].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_enable_slot_without_variable_defaults_value_to_zero() {
        let mut draft = PolicyDraft::new();
        draft.variable = None;
        draft.enable_slot(1);
        assert_eq!(draft.thresholds.len(), 1);
        assert_eq!(draft.thresholds[0].value, 0.0);
    }

    #[test]
    fn test_enable_slot_out_of_range_is_noop() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(0);
        draft.enable_slot(5);
        assert!(draft.thresholds.is_empty());
        assert_eq!(draft.enabled_slots, [false; SLOT_COUNT]);
    }

    // --- Sorting ------------------------------------------------------------

    #[test]
    fn test_enable_keeps_thresholds_sorted_ascending() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.update_threshold(0, ThresholdUpdate::Value(40.0));
        draft.enable_slot(2);
        draft.update_threshold(0, ThresholdUpdate::Value(25.0));
        draft.enable_slot(3);

        let vals = values(&draft);
        for pair in vals.windows(2) {
            assert!(
                pair[0] <= pair[1],
                "thresholds must be ascending after enable_slot, got {:?}",
                vals
            );
        }
    }

    #[test]
    fn test_sort_is_by_value_not_severity() {
        // Slot 1 (low) edited up to 30, then slot 2 (medium) enters at the
        // minimum. The medium threshold sorts first.
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.update_threshold(0, ThresholdUpdate::Value(30.0));
        draft.enable_slot(2);

        assert_eq!(values(&draft), vec![0.0, 30.0]);
        assert_eq!(levels(&draft), vec![RiskLevel::Medium, RiskLevel::Low]);
    }

    #[test]
    fn test_equal_values_keep_insertion_order() {
        // Both slots enter at the minimum (0): tie broken by insertion
        // order, so low precedes high.
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.enable_slot(3);

        assert_eq!(draft.thresholds.len(), 2);
        assert_eq!(values(&draft), vec![0.0, 0.0]);
        assert_eq!(
            levels(&draft),
            vec![RiskLevel::Low, RiskLevel::High],
            "ties must preserve insertion order"
        );
    }

    #[test]
    fn test_update_threshold_does_not_resort() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.enable_slot(2);
        draft.update_threshold(0, ThresholdUpdate::Value(90.0));

        assert_eq!(
            values(&draft),
            vec![90.0, 0.0],
            "value edits leave the list in place until the next enable"
        );
    }

    // --- Disabling ----------------------------------------------------------

    #[test]
    fn test_disable_slot_removes_array_position() {
        // All four slots enabled at the same value keep insertion order
        // low/medium/high/extreme. Disabling slot 2 removes position 1,
        // which here holds the medium threshold.
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        for slot in 1..=4 {
            draft.enable_slot(slot);
        }
        draft.disable_slot(2);

        assert_eq!(draft.thresholds.len(), 3);
        assert_eq!(
            levels(&draft),
            vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Extreme]
        );
        assert!(!draft.enabled_slots[1]);
    }

    #[test]
    fn test_disable_slot_is_positional_after_value_edits() {
        // After edits reorder the list, the removed entry is whatever sits
        // at the slot's array position, not the slot's own risk level.
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.update_threshold(0, ThresholdUpdate::Value(50.0));
        draft.enable_slot(2); // sorts to [medium(0), low(50)]
        draft.disable_slot(1);

        assert_eq!(draft.thresholds.len(), 1);
        assert_eq!(
            draft.thresholds[0].risk_level,
            RiskLevel::Low,
            "position 0 held the medium threshold, so low survives"
        );
    }

    #[test]
    fn test_disable_slot_beyond_list_length_is_noop() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.disable_slot(3);

        assert_eq!(draft.thresholds.len(), 1, "no threshold at position 2 to remove");
        assert!(!draft.enabled_slots[2]);
    }

    #[test]
    fn test_disable_slot_out_of_range_does_not_panic() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.disable_slot(0);
        draft.disable_slot(17);
        assert_eq!(draft.thresholds.len(), 1);
    }

    // --- Field updates ------------------------------------------------------

    #[test]
    fn test_update_threshold_fields() {
        let mut draft = draft_for(WeatherVariable::Lightning);
        draft.enable_slot(1);

        draft.update_threshold(0, ThresholdUpdate::AlertMessage("Move indoors".into()));
        draft.update_threshold(0, ThresholdUpdate::Color("#000000".into()));
        draft.update_threshold(0, ThresholdUpdate::AllClearTime(Some(30)));
        draft.update_threshold(
            0,
            ThresholdUpdate::AllClearMessage(Some("All clear".into())),
        );

        let threshold = &draft.thresholds[0];
        assert_eq!(threshold.alert_message, "Move indoors");
        assert_eq!(threshold.color, "#000000");
        assert_eq!(threshold.all_clear_time, Some(30));
        assert_eq!(threshold.all_clear_message.as_deref(), Some("All clear"));
    }

    #[test]
    fn test_update_threshold_out_of_range_is_noop() {
        let mut draft = draft_for(WeatherVariable::Lightning);
        draft.update_threshold(0, ThresholdUpdate::Value(3.0));
        assert!(draft.thresholds.is_empty());
    }

    // --- Variable selection -------------------------------------------------

    #[test]
    fn test_select_variable_clears_thresholds_and_slots() {
        let mut draft = draft_for(WeatherVariable::WindSpeed);
        draft.enable_slot(1);
        draft.enable_slot(2);

        draft.select_variable(WeatherVariable::HeatIndex);

        assert_eq!(draft.variable, Some(WeatherVariable::HeatIndex));
        assert!(
            draft.thresholds.is_empty(),
            "thresholds from the old variable must not survive"
        );
        assert_eq!(draft.enabled_slots, [false; SLOT_COUNT]);
    }

    // --- Identifier uniqueness ----------------------------------------------

    #[test]
    fn test_threshold_ids_unique_across_enable_disable_cycles() {
        let mut draft = draft_for(WeatherVariable::Lightning);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            draft.enable_slot(1);
            let id = draft.thresholds[0].id;
            assert!(seen.insert(id), "threshold id {} was reused", id);
            draft.disable_slot(1);
        }
    }

    // --- Derivation from an existing policy ---------------------------------

    #[test]
    fn test_from_policy_enables_slot_per_occupied_position() {
        let mut source = draft_for(WeatherVariable::WindSpeed);
        source.name = "High Wind Operations".to_string();
        source.enable_slot(2);
        source.enable_slot(3);
        let variable = source.validate().expect("draft should be valid");
        let policy = source.to_policy(
            variable,
            Uuid::new_v4(),
            chrono::Utc::now(),
            chrono::Utc::now(),
        );

        let derived = PolicyDraft::from_policy(&policy);
        assert_eq!(derived.name, "High Wind Operations");
        assert_eq!(derived.variable, Some(WeatherVariable::WindSpeed));
        assert_eq!(
            derived.enabled_slots,
            [true, true, false, false],
            "two thresholds occupy positions 0 and 1, so slots 1 and 2 open checked"
        );
        assert_eq!(derived.thresholds, policy.thresholds);
    }

    // --- Validation ---------------------------------------------------------

    #[test]
    fn test_validate_rejects_empty_name() {
        let draft = PolicyDraft::new();
        assert_eq!(draft.validate(), Err(PolicyError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_missing_variable() {
        let mut draft = PolicyDraft::new();
        draft.name = "Lightning Safety".to_string();
        draft.variable = None;
        assert_eq!(draft.validate(), Err(PolicyError::NoVariableSelected));
    }

    #[test]
    fn test_validate_accepts_whitespace_name() {
        // Only the truly empty string is refused.
        let mut draft = PolicyDraft::new();
        draft.name = "  ".to_string();
        assert_eq!(draft.validate(), Ok(WeatherVariable::Lightning));
    }

    #[test]
    fn test_validate_reports_empty_name_before_missing_variable() {
        let mut draft = PolicyDraft::new();
        draft.variable = None;
        assert_eq!(draft.validate(), Err(PolicyError::EmptyName));
    }

    // --- Label parsing ------------------------------------------------------

    #[test]
    fn test_parse_label_list_trims_and_drops_empties() {
        let labels = parse_label_list(" Main Campus, Athletic Fields ,, Outdoor Events,");
        assert_eq!(
            labels,
            vec!["Main Campus", "Athletic Fields", "Outdoor Events"]
        );
    }

    #[test]
    fn test_parse_label_list_keeps_duplicates_and_order() {
        let labels = parse_label_list("North Lot, South Lot, North Lot");
        assert_eq!(labels, vec!["North Lot", "South Lot", "North Lot"]);
    }

    #[test]
    fn test_parse_label_list_empty_input() {
        assert!(parse_label_list("").is_empty());
        assert!(parse_label_list(" , ,").is_empty());
    }
}
