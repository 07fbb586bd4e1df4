use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".into(), role: Role::Admin }
}

// =============================================================================
// SessionState accessors
// =============================================================================

#[test]
fn default_state_is_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
}

#[test]
fn unknown_is_not_logged_in() {
    let state = SessionState::Unknown;
    assert!(!state.is_logged_in());
    assert!(state.user().is_none());
    assert!(state.role().is_none());
    assert!(state.token().is_none());
}

#[test]
fn anonymous_is_not_logged_in() {
    let state = SessionState::Anonymous;
    assert!(!state.is_logged_in());
    assert!(state.role().is_none());
}

#[test]
fn authenticated_exposes_identity() {
    let state = SessionState::Authenticated { user: alice(), token: Some("tok".into()) };
    assert!(state.is_logged_in());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.token(), Some("tok"));
}

#[test]
fn logged_in_iff_user_present() {
    for state in [
        SessionState::Unknown,
        SessionState::Anonymous,
        SessionState::Authenticated { user: alice(), token: None },
    ] {
        assert_eq!(state.is_logged_in(), state.user().is_some());
    }
}

// =============================================================================
// apply — transition table
// =============================================================================

#[test]
fn confirmed_from_unknown_authenticates() {
    let next = apply(&SessionState::Unknown, SessionEvent::Confirmed { user: alice(), token: None });
    assert!(next.is_logged_in());
}

#[test]
fn confirmed_from_anonymous_authenticates() {
    let next = apply(&SessionState::Anonymous, SessionEvent::Confirmed { user: alice(), token: Some("t".into()) });
    assert_eq!(next.token(), Some("t"));
}

#[test]
fn confirmed_replaces_existing_identity() {
    let bob = User { id: 2, username: "bob".into(), role: Role::Consignor };
    let current = SessionState::Authenticated { user: alice(), token: Some("old".into()) };
    let next = apply(&current, SessionEvent::Confirmed { user: bob.clone(), token: None });
    assert_eq!(next.user(), Some(&bob));
    assert_eq!(next.token(), None);
}

#[test]
fn rejected_from_any_state_is_anonymous() {
    for state in [
        SessionState::Unknown,
        SessionState::Anonymous,
        SessionState::Authenticated { user: alice(), token: None },
    ] {
        assert_eq!(apply(&state, SessionEvent::Rejected), SessionState::Anonymous);
    }
}

#[test]
fn logged_out_from_any_state_is_anonymous() {
    for state in [
        SessionState::Unknown,
        SessionState::Anonymous,
        SessionState::Authenticated { user: alice(), token: Some("t".into()) },
    ] {
        assert_eq!(apply(&state, SessionEvent::LoggedOut), SessionState::Anonymous);
    }
}

#[test]
fn apply_never_yields_unknown() {
    let events = [
        SessionEvent::Confirmed { user: alice(), token: None },
        SessionEvent::Rejected,
        SessionEvent::LoggedOut,
    ];
    for event in events {
        assert_ne!(apply(&SessionState::Unknown, event), SessionState::Unknown);
    }
}

// =============================================================================
// User serde
// =============================================================================

#[test]
fn user_round_trips_through_json() {
    let json = r#"{"id":1,"username":"alice","role":"admin"}"#;
    let user: User = serde_json::from_str(json).expect("valid user json");
    assert_eq!(user, alice());
}

#[test]
fn user_with_unknown_role_fails_to_parse() {
    let json = r#"{"id":1,"username":"alice","role":"superuser"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}
