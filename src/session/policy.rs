//! Roles, the role hierarchy, and the feature permission policy.
//!
//! DESIGN
//! ======
//! Both tables are static: the hierarchy maps a role to every role it
//! subsumes (reflexively), and the feature policy maps a feature name to
//! the roles allowed to use it. Feature checks test direct membership in
//! the allowed set — they do not expand the hierarchy — which is why
//! `admin` is listed explicitly on every gated feature.
//!
//! Features absent from the policy table are allowed for everyone,
//! including anonymous visitors. That fail-open stance is inherited
//! behavior; see DESIGN.md before tightening it.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Consignor,
    YoutubeLinker,
    Public,
}

impl Role {
    /// Every role this role subsumes, itself included.
    #[must_use]
    pub fn grants(self) -> &'static [Role] {
        match self {
            Self::Admin => &[Self::Admin, Self::Consignor, Self::YoutubeLinker, Self::Public],
            Self::Consignor => &[Self::Consignor, Self::Public],
            Self::YoutubeLinker => &[Self::YoutubeLinker, Self::Public],
            Self::Public => &[Self::Public],
        }
    }

    /// True when this role subsumes `other` in the fixed hierarchy.
    #[must_use]
    pub fn subsumes(self, other: Role) -> bool {
        self.grants().contains(&other)
    }

    /// Wire/display name (matches the serde representation).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Consignor => "consignor",
            Self::YoutubeLinker => "youtube_linker",
            Self::Public => "public",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Self::Admin),
            "consignor" => Ok(Self::Consignor),
            "youtube_linker" => Ok(Self::YoutubeLinker),
            "public" => Ok(Self::Public),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Roles allowed to use a feature, or `None` when the feature is unlisted.
#[must_use]
pub fn allowed_roles(feature: &str) -> Option<&'static [Role]> {
    match feature {
        "add_records" => Some(&[Role::Admin, Role::Consignor]),
        "view_orders" => Some(&[Role::Admin, Role::Consignor]),
        "link_videos" => Some(&[Role::Admin, Role::YoutubeLinker]),
        "manage_users" => Some(&[Role::Admin]),
        "manage_shipping" => Some(&[Role::Admin]),
        "run_sql" => Some(&[Role::Admin]),
        "compare_prices" => Some(&[Role::Admin]),
        _ => None,
    }
}

/// Whether `role` (none = anonymous) may use `feature`.
///
/// Unlisted features are allowed for everyone; listed features require
/// direct membership in the allowed set.
#[must_use]
pub fn can_access(feature: &str, role: Option<Role>) -> bool {
    let Some(allowed) = allowed_roles(feature) else {
        tracing::debug!(feature, "feature not in policy table, allowing");
        return true;
    };

    role.is_some_and(|role| allowed.contains(&role))
}
