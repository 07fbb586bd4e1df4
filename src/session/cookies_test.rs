use super::*;

// =============================================================================
// expiry_directives
// =============================================================================

#[test]
fn three_directives_per_cookie_name() {
    let directives = expiry_directives(&["session_token"], "www.spindleshop.com");
    assert_eq!(directives.len(), 3);
}

#[test]
fn covers_host_only_plain_and_dotted_domains() {
    let directives = expiry_directives(&["session_token"], "www.spindleshop.com");
    let domains: Vec<Option<&str>> = directives.iter().map(|d| d.domain.as_deref()).collect();
    assert!(domains.contains(&None));
    assert!(domains.contains(&Some("www.spindleshop.com")));
    assert!(domains.contains(&Some(".www.spindleshop.com")));
}

#[test]
fn all_directives_use_root_path() {
    for directive in expiry_directives(SESSION_COOKIE_NAMES, "www.spindleshop.com") {
        assert_eq!(directive.path, "/");
    }
}

#[test]
fn every_known_cookie_is_covered() {
    let directives = expiry_directives(SESSION_COOKIE_NAMES, "www.spindleshop.com");
    for name in SESSION_COOKIE_NAMES {
        assert!(directives.iter().any(|d| d.name == *name), "missing {name}");
    }
}

#[test]
fn empty_hostname_yields_host_only_directive() {
    let directives = expiry_directives(&["session_token"], "");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].domain, None);
}

#[test]
fn leading_dot_in_hostname_is_normalized() {
    let directives = expiry_directives(&["session_token"], ".spindleshop.com");
    let domains: Vec<Option<&str>> = directives.iter().map(|d| d.domain.as_deref()).collect();
    assert!(domains.contains(&Some("spindleshop.com")));
    assert!(domains.contains(&Some(".spindleshop.com")));
}

// =============================================================================
// header_value
// =============================================================================

#[test]
fn header_value_without_domain() {
    let directive = CookieExpiry { name: "session_token".into(), path: "/".into(), domain: None };
    assert_eq!(directive.header_value(), "session_token=; Path=/; Max-Age=0");
}

#[test]
fn header_value_with_domain() {
    let directive = CookieExpiry {
        name: "sessionid".into(),
        path: "/".into(),
        domain: Some(".spindleshop.com".into()),
    };
    assert_eq!(directive.header_value(), "sessionid=; Path=/; Max-Age=0; Domain=.spindleshop.com");
}
