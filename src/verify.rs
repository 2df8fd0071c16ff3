//! Registry Integrity Verification
//!
//! Framework for checking the static variable registry against its
//! structural invariants: every variable has exactly one configuration
//! entry and one group membership, bounds are ordered, and default
//! threshold ladders are well-formed.
//!
//! Run `assert_registry_integrity` at startup; a violation is a fatal
//! configuration error, not a runtime-recoverable condition.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::editor::SLOT_COUNT;
use crate::model::WeatherVariable;
use crate::variables::{self, VariableGroup, VARIABLE_GROUPS, VARIABLE_REGISTRY};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryReport {
    pub timestamp: String,
    pub variable_results: Vec<VariableVerification>,
    pub group_results: Vec<GroupVerification>,
    pub summary: RegistrySummary,
}

impl RegistryReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub variables_total: usize,
    pub variables_passing: usize,
    pub variables_failing: usize,
    pub groups_total: usize,
    pub groups_passing: usize,
    pub groups_failing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableVerification {
    pub variable_id: String,
    pub status: VerificationStatus,
    pub config_entries: usize,
    pub group_memberships: usize,
    pub default_threshold_count: usize,
    pub problems: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupVerification {
    pub group_id: String,
    pub status: VerificationStatus,
    pub member_count: usize,
    pub problems: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    Success,
    PartialSuccess,
    Failed,
}

// ============================================================================
// Variable Verification
// ============================================================================

pub fn verify_variable(variable: WeatherVariable) -> VariableVerification {
    let mut result = VariableVerification {
        variable_id: variable.id().to_string(),
        status: VerificationStatus::Failed,
        config_entries: 0,
        group_memberships: 0,
        default_threshold_count: 0,
        problems: Vec::new(),
    };

    result.config_entries = VARIABLE_REGISTRY
        .iter()
        .filter(|c| c.variable == variable)
        .count();
    if result.config_entries != 1 {
        result.problems.push(format!(
            "expected exactly one registry entry, found {}",
            result.config_entries
        ));
    }

    result.group_memberships = VARIABLE_GROUPS
        .iter()
        .filter(|g| g.members.contains(&variable))
        .count();
    if result.group_memberships != 1 {
        result.problems.push(format!(
            "expected exactly one group membership, found {}",
            result.group_memberships
        ));
    }

    if let Some(config) = variables::find_config(variable) {
        result.default_threshold_count = config.default_thresholds.len();

        if config.min_value >= config.max_value {
            result.problems.push(format!(
                "min_value {} is not below max_value {}",
                config.min_value, config.max_value
            ));
        }

        if config.default_thresholds.len() > SLOT_COUNT {
            result.problems.push(format!(
                "{} default thresholds exceed the {}-slot ladder",
                config.default_thresholds.len(),
                SLOT_COUNT
            ));
        }

        for template in config.default_thresholds {
            if template.value < config.min_value || template.value > config.max_value {
                result.problems.push(format!(
                    "default threshold {} is outside [{}, {}]",
                    template.value, config.min_value, config.max_value
                ));
            }
        }

        let levels: Vec<_> = config
            .default_thresholds
            .iter()
            .map(|t| t.risk_level)
            .collect();
        for pair in levels.windows(2) {
            if pair[0] >= pair[1] {
                result.problems.push(format!(
                    "default risk levels are not strictly ascending: {:?}",
                    levels
                ));
                break;
            }
        }
    }

    // A short default ladder is legitimate (binary signals) but worth
    // surfacing in the report.
    if result.problems.is_empty() {
        if result.default_threshold_count == SLOT_COUNT {
            result.status = VerificationStatus::Success;
        } else {
            result.status = VerificationStatus::PartialSuccess;
        }
    }

    result
}

// ============================================================================
// Group Verification
// ============================================================================

pub fn verify_group(group: &VariableGroup) -> GroupVerification {
    let mut result = GroupVerification {
        group_id: group.id.to_string(),
        status: VerificationStatus::Failed,
        member_count: group.members.len(),
        problems: Vec::new(),
    };

    if group.members.is_empty() {
        result.problems.push("group has no members".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for member in group.members {
        if !seen.insert(member) {
            result
                .problems
                .push(format!("member '{}' listed twice", member.id()));
        }
        let elsewhere = VARIABLE_GROUPS
            .iter()
            .filter(|g| g.id != group.id && g.members.contains(member))
            .count();
        if elsewhere > 0 {
            result.problems.push(format!(
                "member '{}' also appears in {} other group(s)",
                member.id(),
                elsewhere
            ));
        }
    }

    if result.problems.is_empty() {
        result.status = VerificationStatus::Success;
    }

    result
}

// ============================================================================
// Full Verification Runner
// ============================================================================

pub fn run_registry_verification() -> RegistryReport {
    let mut report = RegistryReport {
        timestamp: Utc::now().to_rfc3339(),
        variable_results: Vec::new(),
        group_results: Vec::new(),
        summary: RegistrySummary {
            variables_total: 0,
            variables_passing: 0,
            variables_failing: 0,
            groups_total: 0,
            groups_passing: 0,
            groups_failing: 0,
        },
    };

    report.summary.variables_total = WeatherVariable::ALL.len();
    for variable in WeatherVariable::ALL {
        let result = verify_variable(variable);
        match result.status {
            VerificationStatus::Success | VerificationStatus::PartialSuccess => {
                report.summary.variables_passing += 1;
            }
            VerificationStatus::Failed => {
                report.summary.variables_failing += 1;
            }
        }
        report.variable_results.push(result);
    }

    report.summary.groups_total = VARIABLE_GROUPS.len();
    for group in VARIABLE_GROUPS {
        let result = verify_group(group);
        match result.status {
            VerificationStatus::Success | VerificationStatus::PartialSuccess => {
                report.summary.groups_passing += 1;
            }
            VerificationStatus::Failed => {
                report.summary.groups_failing += 1;
            }
        }
        report.group_results.push(result);
    }

    report
}

/// Startup assertion: panics if any variable or group fails verification.
///
/// Call this once during initialization. A failure here means the compiled
/// registry tables are inconsistent, which no runtime handling can repair.
pub fn assert_registry_integrity() {
    let report = run_registry_verification();
    let mut failures = Vec::new();

    for result in &report.variable_results {
        if result.status == VerificationStatus::Failed {
            failures.push(format!(
                "variable '{}': {}",
                result.variable_id,
                result.problems.join("; ")
            ));
        }
    }
    for result in &report.group_results {
        if result.status == VerificationStatus::Failed {
            failures.push(format!(
                "group '{}': {}",
                result.group_id,
                result.problems.join("; ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "variable registry failed integrity verification:\n  {}",
            failures.join("\n  ")
        );
    }
}

pub fn print_summary(report: &RegistryReport) {
    println!("\n═══════════════════════════════════════════════════════════");
    println!("REGISTRY VERIFICATION SUMMARY");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "Variables:  {}/{} passing  ({} failed)",
        report.summary.variables_passing,
        report.summary.variables_total,
        report.summary.variables_failing
    );
    println!(
        "Groups:     {}/{} passing  ({} failed)",
        report.summary.groups_passing, report.summary.groups_total, report.summary.groups_failing
    );
    println!();

    for result in &report.variable_results {
        let marker = match result.status {
            VerificationStatus::Success => "✓",
            VerificationStatus::PartialSuccess => "⚠",
            VerificationStatus::Failed => "✗",
        };
        println!(
            "  {} {} ({} defaults)",
            marker, result.variable_id, result.default_threshold_count
        );
        for problem in &result.problems {
            println!("      - {}", problem);
        }
    }
    println!("═══════════════════════════════════════════════════════════");
}

// ============================================================================
// Tests
// ============================================================================
