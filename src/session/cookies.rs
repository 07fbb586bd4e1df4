//! Cookie force-expiry directives for explicit logout.
//!
//! Server session cookies can outlive a client-side logout; to defeat
//! lingering sessions, each known cookie is expired across the root path
//! for the host-only scope, the hostname, and the dot-prefixed hostname.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Session cookies the backend is known to set.
pub const SESSION_COOKIE_NAMES: &[&str] = &["session_token", "sessionid"];

/// One cookie to expire: name, path, and optional domain scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieExpiry {
    pub name: String,
    pub path: String,
    /// `None` expires the host-only cookie.
    pub domain: Option<String>,
}

impl CookieExpiry {
    /// Render as a `Set-Cookie` header value with an immediate expiry.
    #[must_use]
    pub fn header_value(&self) -> String {
        let mut value = format!("{}=; Path={}; Max-Age=0", self.name, self.path);
        if let Some(domain) = &self.domain {
            value.push_str("; Domain=");
            value.push_str(domain);
        }
        value
    }
}

/// Expiry directives for `names` across root path and hostname variants.
#[must_use]
pub fn expiry_directives(names: &[&str], hostname: &str) -> Vec<CookieExpiry> {
    let host = hostname.trim().trim_start_matches('.');
    let mut directives = Vec::with_capacity(names.len() * 3);

    for name in names {
        directives.push(CookieExpiry { name: (*name).to_owned(), path: "/".to_owned(), domain: None });

        if host.is_empty() {
            continue;
        }
        directives.push(CookieExpiry {
            name: (*name).to_owned(),
            path: "/".to_owned(),
            domain: Some(host.to_owned()),
        });
        directives.push(CookieExpiry {
            name: (*name).to_owned(),
            path: "/".to_owned(),
            domain: Some(format!(".{host}")),
        });
    }

    directives
}
