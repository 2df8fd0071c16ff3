//! Policy list filtering and search.
//!
//! Pure view computation over the store's collection: no state, no
//! mutation. The dashboard calls `visible` on every keystroke, so matching
//! stays simple substring work.

use crate::model::Policy;

// ---------------------------------------------------------------------------
// Status filter
// ---------------------------------------------------------------------------

/// Active/inactive narrowing applied alongside the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn admits(&self, policy: &Policy) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => policy.is_active,
            StatusFilter::Inactive => !policy.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Visible subset
// ---------------------------------------------------------------------------

/// Computes the visible subset of `policies` for a text query and status
/// filter.
///
/// The query is matched case-insensitively as a substring of either the
/// policy name or the weather variable identifier (`wind_speed`, not the
/// "Wind Speed" label). Text and status conditions are ANDed. The empty
/// query matches everything. Store order is preserved; there is no
/// relevance re-sorting.
pub fn visible<'a>(
    policies: &'a [Policy],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Policy> {
    let needle = query.to_lowercase();
    policies
        .iter()
        .filter(|p| status.admits(p))
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.weather_variable.id().contains(&needle)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
