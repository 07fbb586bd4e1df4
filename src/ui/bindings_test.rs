use super::*;
use crate::session::state::User;

fn authed(role: Role) -> SessionState {
    SessionState::Authenticated {
        user: User { id: 1, username: "u".into(), role },
        token: None,
    }
}

// =============================================================================
// Marker-free elements
// =============================================================================

#[test]
fn unmarked_element_visible_to_everyone() {
    let binding = ElementBinding::none();
    assert!(binding.is_visible(&SessionState::Unknown));
    assert!(binding.is_visible(&SessionState::Anonymous));
    assert!(binding.is_visible(&authed(Role::Public)));
}

// =============================================================================
// require_auth
// =============================================================================

#[test]
fn require_auth_hidden_when_anonymous() {
    let binding = ElementBinding::require_auth();
    assert!(!binding.is_visible(&SessionState::Anonymous));
    assert!(!binding.is_visible(&SessionState::Unknown));
}

#[test]
fn require_auth_visible_for_any_authenticated_role() {
    let binding = ElementBinding::require_auth();
    for role in [Role::Admin, Role::Consignor, Role::YoutubeLinker, Role::Public] {
        assert!(binding.is_visible(&authed(role)));
    }
}

// =============================================================================
// require_role
// =============================================================================

#[test]
fn require_role_uses_subsumption() {
    let binding = ElementBinding::require_role(Role::Consignor);
    assert!(binding.is_visible(&authed(Role::Admin)));
    assert!(binding.is_visible(&authed(Role::Consignor)));
    assert!(!binding.is_visible(&authed(Role::YoutubeLinker)));
    assert!(!binding.is_visible(&authed(Role::Public)));
}

#[test]
fn require_role_hidden_when_anonymous() {
    let binding = ElementBinding::require_role(Role::Public);
    assert!(!binding.is_visible(&SessionState::Anonymous));
}

#[test]
fn add_record_button_matches_consignor_gate() {
    let binding = ElementBinding::add_record_button();
    assert!(binding.is_visible(&authed(Role::Consignor)));
    assert!(binding.is_visible(&authed(Role::Admin)));
    assert!(!binding.is_visible(&authed(Role::Public)));
    assert!(!binding.is_visible(&SessionState::Anonymous));
}

// =============================================================================
// admin_only
// =============================================================================

#[test]
fn admin_only_visible_to_admin_alone() {
    let binding = ElementBinding::admin_only();
    assert!(binding.is_visible(&authed(Role::Admin)));
    for role in [Role::Consignor, Role::YoutubeLinker, Role::Public] {
        assert!(!binding.is_visible(&authed(role)));
    }
    assert!(!binding.is_visible(&SessionState::Anonymous));
}
