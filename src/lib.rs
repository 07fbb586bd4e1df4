//! Native client for the Spindle record-store API.
//!
//! ARCHITECTURE
//! ============
//! `config` resolves the deployment environment and API base URL. `net`
//! owns the endpoint registry and the JSON HTTP client. `session` is the
//! stateful core: a pure auth state machine driven by a `SessionStore`
//! that persists to pluggable storage and notifies observers after every
//! transition. `ui` derives navigation and element-visibility view-models
//! from session state so rendering stays out of the state machine.

pub mod config;
pub mod net;
pub mod session;
pub mod ui;

pub use config::{EnvConfig, Environment};
pub use net::error::RequestError;
pub use net::http::{ApiClient, RequestOptions};
pub use session::policy::Role;
pub use session::state::{SessionState, User};
pub use session::store::{LoginError, SessionObserver, SessionStore};
