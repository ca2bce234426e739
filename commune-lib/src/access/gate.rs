//! The access gate: route visibility and page guarding.

use super::AccessPolicy;
use super::NavItem;

/// A pre-validated identity handed in by the session collaborator.
///
/// The gate never authenticates; it only authorizes against the role
/// carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Role name looked up in the [`AccessPolicy`].
    pub role: String,
    /// Email address, when known.
    pub email: Option<String>,
}

impl User {
    /// Creates a user with the given display name and role.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: None,
        }
    }

    /// Sets the email address (builder pattern).
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Outcome of a page-view attempt.
///
/// Recomputed from the current `(user, route)` pair on every navigation;
/// nothing is stored between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDecision {
    /// Render the page.
    Allow,
    /// No authenticated user; send to the login page.
    RedirectToLogin,
    /// Authenticated but not permitted; show the forbidden view.
    Forbidden,
}

/// Answers "can role R see route P?" and guards page views.
///
/// All checks fail closed: an unknown role or route resolves to the most
/// restrictive outcome, never an error.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    policy: AccessPolicy,
}

impl AccessGate {
    /// Creates a gate over the given policy.
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// Returns `true` iff `role` may visit `route`.
    ///
    /// Unknown roles have no access.
    pub fn has_access(&self, role: &str, route: &str) -> bool {
        match self.policy.route_access(role) {
            Some(access) => access.permits(route),
            None => false,
        }
    }

    /// Keeps exactly the navigation items whose route `role` may visit,
    /// preserving their order.
    pub fn filter_nav<'a>(&self, items: &'a [NavItem], role: &str) -> Vec<&'a NavItem> {
        items
            .iter()
            .filter(|item| self.has_access(role, &item.route))
            .collect()
    }

    /// Decides whether `user` may view `route` right now.
    ///
    /// The ladder: no user → redirect to login; `required_role` set and not
    /// matched → forbidden; role lacks the route → forbidden; else allow.
    pub fn guard_page(
        &self,
        user: Option<&User>,
        route: &str,
        required_role: Option<&str>,
    ) -> PageDecision {
        let Some(user) = user else {
            log::debug!("unauthenticated view of {route}, redirecting to login");
            return PageDecision::RedirectToLogin;
        };
        if let Some(required) = required_role
            && user.role != required
        {
            log::debug!("role '{}' lacks required role '{required}' for {route}", user.role);
            return PageDecision::Forbidden;
        }
        if !self.has_access(&user.role, route) {
            log::debug!("role '{}' denied access to {route}", user.role);
            return PageDecision::Forbidden;
        }
        PageDecision::Allow
    }
}
