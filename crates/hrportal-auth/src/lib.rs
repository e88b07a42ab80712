//! # hrportal-auth
//!
//! Session and access control for the HR Portal gateway.
//!
//! ## Modules
//!
//! - `role` — the two-variant caller role, derived from the backend's
//!   `is_hr` flag at the claim boundary
//! - `session` — the authenticated caller for one browser session
//! - `token` — signed session token creation and validation
//! - `policy` — the route access policy evaluated on every navigation

pub mod policy;
pub mod role;
pub mod session;
pub mod token;

pub use policy::{RouteDecision, decide};
pub use role::Role;
pub use session::Session;
pub use token::{SessionClaims, TokenDecoder, TokenEncoder};
