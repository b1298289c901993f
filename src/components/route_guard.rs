//! Route guard for protected views.
//!
//! The check is synchronous against the session store and runs again on
//! every navigation (route views re-mount), so a session torn down by a
//! 401 in the meantime is caught without extra wiring. Role matching is
//! strict equality — there is no hierarchy, `Admin` does not satisfy a
//! `Manager` requirement.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::session::store::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    RedirectHome,
}

/// Decide what a protected view should render.
///
/// Order matters: authentication first, then the optional role check.
/// The role check only applies when a cached user is readable; a token
/// without a readable profile passes, and the next 401 cleans up.
pub fn evaluate(session: &SessionStore, required_role: Option<Role>) -> GuardOutcome {
    if !session.is_authenticated() {
        return GuardOutcome::RedirectLogin;
    }
    if let Some(required) = required_role {
        if let Some(user) = session.user() {
            if user.role != required {
                return GuardOutcome::RedirectHome;
            }
        }
    }
    GuardOutcome::Allow
}

/// Wraps protected content; optionally demands an exact role.
///
/// Authorization failure is a silent redirect to the home view, never an
/// error message.
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || match evaluate(&session, role) {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
        GuardOutcome::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
    }
}
