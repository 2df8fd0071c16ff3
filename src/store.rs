//! In-memory policy store.
//!
//! Holds the session's policies in insertion order. Supports create,
//! update-by-id, and active toggling; there is no delete and no
//! persistence, so the collection only grows within a session.
//!
//! # Clock injection
//! Mutating operations come in pairs: `create_at`/`create`,
//! `update_at`/`update`, `set_active_at`/`set_active`. The `*_at` variants
//! accept a `now: DateTime<Utc>` so timestamp behavior is deterministic in
//! tests; the short names wrap them with `Utc::now()`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::editor::PolicyDraft;
use crate::logging::{self, Component};
use crate::model::{Policy, PolicyError};

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Ordered in-memory collection of policies.
#[derive(Debug, Default)]
pub struct PolicyStore {
    policies: Vec<Policy>,
}

impl PolicyStore {
    pub fn new() -> Self {
        PolicyStore {
            policies: Vec::new(),
        }
    }

    /// Bootstraps a store from already-materialized policies, keeping their
    /// ids and timestamps. Used for development seeding
    /// (`dev_mode::sample_policies`); normal authoring goes through
    /// `create`.
    pub fn with_initial(policies: Vec<Policy>) -> Self {
        PolicyStore { policies }
    }

    /// Commits a draft as a new policy: validates it, assigns a fresh id,
    /// stamps `created_at = updated_at = now`, and appends it to the end.
    ///
    /// Refusals (empty name, no variable) are returned as errors and logged
    /// at Warning level; the store is left unchanged.
    pub fn create_at(
        &mut self,
        draft: &PolicyDraft,
        now: DateTime<Utc>,
    ) -> Result<&Policy, PolicyError> {
        let variable = self.validated(draft)?;
        let policy = draft.to_policy(variable, Uuid::new_v4(), now, now);
        logging::info(
            Component::Store,
            Some(&policy.id.to_string()),
            &format!("Created policy '{}'", policy.name),
        );
        self.policies.push(policy);
        Ok(&self.policies[self.policies.len() - 1])
    }

    /// Convenience wrapper for `create_at` using the real current time.
    pub fn create(&mut self, draft: &PolicyDraft) -> Result<&Policy, PolicyError> {
        self.create_at(draft, Utc::now())
    }

    /// Replaces the policy matching `id` with the draft's fields, keeping
    /// its position and original `created_at` and refreshing `updated_at`.
    pub fn update_at(
        &mut self,
        id: Uuid,
        draft: &PolicyDraft,
        now: DateTime<Utc>,
    ) -> Result<&Policy, PolicyError> {
        let variable = self.validated(draft)?;
        let position = self.position_of(id)?;
        let created_at = self.policies[position].created_at;
        self.policies[position] = draft.to_policy(variable, id, created_at, now);
        logging::info(
            Component::Store,
            Some(&id.to_string()),
            &format!("Updated policy '{}'", self.policies[position].name),
        );
        Ok(&self.policies[position])
    }

    /// Convenience wrapper for `update_at` using the real current time.
    pub fn update(&mut self, id: Uuid, draft: &PolicyDraft) -> Result<&Policy, PolicyError> {
        self.update_at(id, draft, Utc::now())
    }

    /// Flips a policy's active flag in place and refreshes `updated_at`.
    pub fn set_active_at(
        &mut self,
        id: Uuid,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> Result<&Policy, PolicyError> {
        let position = self.position_of(id)?;
        let policy = &mut self.policies[position];
        policy.is_active = is_active;
        policy.updated_at = now;
        logging::debug(
            Component::Store,
            Some(&id.to_string()),
            &format!(
                "Policy '{}' set {}",
                policy.name,
                if is_active { "active" } else { "inactive" }
            ),
        );
        Ok(&self.policies[position])
    }

    /// Convenience wrapper for `set_active_at` using the real current time.
    pub fn set_active(&mut self, id: Uuid, is_active: bool) -> Result<&Policy, PolicyError> {
        self.set_active_at(id, is_active, Utc::now())
    }

    // --- Read access --------------------------------------------------------

    /// All policies in insertion order.
    pub fn all(&self) -> &[Policy] {
        &self.policies
    }

    /// Looks up a policy by id. Returns `None` if not found.
    pub fn find(&self, id: Uuid) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Number of active policies, for the dashboard header.
    pub fn active_count(&self) -> usize {
        self.policies.iter().filter(|p| p.is_active).count()
    }

    /// Number of inactive policies, for the dashboard header.
    pub fn inactive_count(&self) -> usize {
        self.policies.iter().filter(|p| !p.is_active).count()
    }

    // --- Internals ----------------------------------------------------------

    fn validated(&self, draft: &PolicyDraft) -> Result<crate::model::WeatherVariable, PolicyError> {
        draft.validate().inspect_err(|e| {
            logging::warn(Component::Store, None, &format!("Save refused: {}", e));
        })
    }

    fn position_of(&self, id: Uuid) -> Result<usize, PolicyError> {
        match self.policies.iter().position(|p| p.id == id) {
            Some(position) => Ok(position),
            None => {
                logging::warn(
                    Component::Store,
                    Some(&id.to_string()),
                    "No policy with this id",
                );
                Err(PolicyError::UnknownPolicy(id))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
