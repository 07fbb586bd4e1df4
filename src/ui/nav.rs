//! Navigation auth-section view-model.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::session::policy::Role;
use crate::session::state::SessionState;

/// One link in the navigation auth section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// What the nav auth section should render for a given session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavView {
    /// Unknown or anonymous: offer a login link.
    SignedOut,
    /// Authenticated: greet the user, offer account links.
    SignedIn { username: String, role: Role },
}

impl NavView {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        match state.user() {
            Some(user) => Self::SignedIn { username: user.username.clone(), role: user.role },
            None => Self::SignedOut,
        }
    }

    /// Links to render, in order. Admins get the admin panel link.
    #[must_use]
    pub fn links(&self) -> Vec<NavLink> {
        match self {
            Self::SignedOut => vec![NavLink { label: "Log in", href: "/login" }],
            Self::SignedIn { role, .. } => {
                let mut links = vec![
                    NavLink { label: "My account", href: "/account" },
                    NavLink { label: "Log out", href: "/logout" },
                ];
                if *role == Role::Admin {
                    links.insert(0, NavLink { label: "Admin", href: "/admin" });
                }
                links
            }
        }
    }
}
