//! Declarative visibility bindings for auth-gated page elements.
//!
//! DESIGN
//! ======
//! A binding mirrors the host page's markers (`data-require-auth`,
//! `data-require-role`, `data-admin-only`). Pages only ask about elements
//! they actually have — an element absent from a page simply never
//! produces a binding, which is "feature not present", not an error.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::session::policy::Role;
use crate::session::state::SessionState;

/// Auth requirements attached to one page element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementBinding {
    /// Element requires any authenticated session.
    pub require_auth: bool,
    /// Element requires a role subsuming this one.
    pub require_role: Option<Role>,
    /// Element is for admins only, no subsumption.
    pub admin_only: bool,
}

impl ElementBinding {
    /// Marker-free element, always visible.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn require_auth() -> Self {
        Self { require_auth: true, ..Self::default() }
    }

    #[must_use]
    pub fn require_role(role: Role) -> Self {
        Self { require_auth: true, require_role: Some(role), ..Self::default() }
    }

    #[must_use]
    pub fn admin_only() -> Self {
        Self { require_auth: true, admin_only: true, ..Self::default() }
    }

    /// The add-record button: consignors and above.
    #[must_use]
    pub fn add_record_button() -> Self {
        Self::require_role(Role::Consignor)
    }

    /// Whether the bound element should be visible (and enabled) for
    /// `state`. Satisfying every present marker is required.
    #[must_use]
    pub fn is_visible(&self, state: &SessionState) -> bool {
        if self.require_auth && !state.is_logged_in() {
            return false;
        }

        if let Some(required) = self.require_role {
            let satisfied = state.role().is_some_and(|role| role.subsumes(required));
            if !satisfied {
                return false;
            }
        }

        if self.admin_only && state.role() != Some(Role::Admin) {
            return false;
        }

        true
    }
}
