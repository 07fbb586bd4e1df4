use super::*;
use crate::session::state::User;

fn authed(username: &str, role: Role) -> SessionState {
    SessionState::Authenticated {
        user: User { id: 1, username: username.into(), role },
        token: None,
    }
}

// =============================================================================
// from_state
// =============================================================================

#[test]
fn unknown_renders_signed_out() {
    assert_eq!(NavView::from_state(&SessionState::Unknown), NavView::SignedOut);
}

#[test]
fn anonymous_renders_signed_out() {
    assert_eq!(NavView::from_state(&SessionState::Anonymous), NavView::SignedOut);
}

#[test]
fn authenticated_renders_signed_in() {
    let view = NavView::from_state(&authed("alice", Role::Admin));
    assert_eq!(view, NavView::SignedIn { username: "alice".into(), role: Role::Admin });
}

// =============================================================================
// links
// =============================================================================

#[test]
fn signed_out_offers_login_link() {
    let links = NavView::SignedOut.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].href, "/login");
}

#[test]
fn signed_in_offers_account_and_logout() {
    let links = NavView::from_state(&authed("carol", Role::Consignor)).links();
    let hrefs: Vec<&str> = links.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/account", "/logout"]);
}

#[test]
fn admin_gets_admin_panel_link_first() {
    let links = NavView::from_state(&authed("alice", Role::Admin)).links();
    let hrefs: Vec<&str> = links.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/admin", "/account", "/logout"]);
}

#[test]
fn non_admin_roles_get_no_admin_link() {
    for role in [Role::Consignor, Role::YoutubeLinker, Role::Public] {
        let links = NavView::from_state(&authed("u", role)).links();
        assert!(links.iter().all(|l| l.href != "/admin"), "{role} should not see admin link");
    }
}
