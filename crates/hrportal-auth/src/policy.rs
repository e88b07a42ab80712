//! Route access policy.
//!
//! A pure function of (session, path) evaluated before any protected page
//! is produced. Authorization mismatches are silent redirects to the
//! caller's own landing path, never surfaced as errors.

use crate::role::Role;
use crate::session::Session;

/// The public entry path (login page).
pub const ENTRY_PATH: &str = "/";
/// Landing path and prefix of the HR roster pages.
pub const HR_HOME: &str = "/empleados";
/// Landing path and prefix of the employee self-service pages.
pub const EMPLOYEE_HOME: &str = "/mi-perfil";

/// Outcome of evaluating the access policy for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Let the request through to the handler.
    Allow,
    /// Answer with a redirect to the given path instead.
    RedirectTo(&'static str),
}

/// Decides whether a navigation is allowed, evaluated in rule order:
///
/// 1. No session on a protected path: back to the entry path.
/// 2. A valid session on the entry path: to the role's landing path
///    (authenticated users are never shown the login page).
/// 3. HR on an employee self-service path: to the roster.
/// 4. Employee on a roster path: to their own profile.
/// 5. Anything else passes.
pub fn decide(session: Option<&Session>, path: &str) -> RouteDecision {
    let Some(session) = session else {
        if path == ENTRY_PATH {
            return RouteDecision::Allow;
        }
        return RouteDecision::RedirectTo(ENTRY_PATH);
    };

    if path == ENTRY_PATH {
        return RouteDecision::RedirectTo(session.role.home_path());
    }

    match session.role {
        Role::Hr if path.starts_with(EMPLOYEE_HOME) => RouteDecision::RedirectTo(HR_HOME),
        Role::Employee if path.starts_with(HR_HOME) => RouteDecision::RedirectTo(EMPLOYEE_HOME),
        _ => RouteDecision::Allow,
    }
}
