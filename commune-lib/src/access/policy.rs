//! Role → allowed-routes policy.

use std::collections::HashMap;
use std::collections::HashSet;

/// Role names known to the municipal installation.
pub mod role {
    /// System administrator; sees every route.
    pub const ADMIN: &str = "admin";
    /// HR manager; staff and work reports.
    pub const STARFSMANNASTJORI: &str = "starfsmannastjori";
    /// School office; schools, students, guardians, attendance.
    pub const SKOLASKRIFSTOFA: &str = "skolaskrifstofa";
    /// Communications officer; mass mail and news.
    pub const SAMSKIPTI: &str = "samskipti";
}

/// The routes one role may visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Sentinel: every route, present and future.
    All,
    /// Exactly these routes.
    Routes(HashSet<String>),
}

impl RouteAccess {
    /// Returns `true` if `route` is covered.
    pub fn permits(&self, route: &str) -> bool {
        match self {
            RouteAccess::All => true,
            RouteAccess::Routes(routes) => routes.contains(route),
        }
    }
}

/// Static mapping from role name to allowed routes.
///
/// Built once at process start from fixed configuration and never mutated
/// afterwards; it may be read concurrently by any number of callers. Roles
/// absent from the map have no access at all (fail closed).
///
/// # Example
///
/// ```
/// use commune_lib::access::{AccessPolicy, role};
///
/// let policy = AccessPolicy::empty()
///     .allow_all(role::ADMIN)
///     .allow(role::SAMSKIPTI, ["/", "/postur"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub(crate) roles: HashMap<String, RouteAccess>,
}

impl AccessPolicy {
    /// Creates a policy with no roles (everything denied).
    pub fn empty() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Grants a role the all-routes sentinel (builder pattern).
    pub fn allow_all(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into(), RouteAccess::All);
        self
    }

    /// Grants a role exactly the given routes (builder pattern).
    pub fn allow<I, R>(mut self, role: impl Into<String>, routes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let routes = routes.into_iter().map(Into::into).collect();
        self.roles.insert(role.into(), RouteAccess::Routes(routes));
        self
    }

    /// Returns the route access for a role, if the role is known.
    pub fn route_access(&self, role: &str) -> Option<&RouteAccess> {
        self.roles.get(role)
    }

    /// The standard municipal policy.
    ///
    /// Every office sees the overview; admin sees everything.
    pub fn municipal() -> Self {
        Self::empty()
            .allow_all(role::ADMIN)
            .allow(
                role::SKOLASKRIFSTOFA,
                ["/", "/skolar", "/nemendur", "/adstandendur", "/astundun"],
            )
            .allow(
                role::STARFSMANNASTJORI,
                ["/", "/starfsmenn", "/vinnuskyrslur"],
            )
            .allow(role::SAMSKIPTI, ["/", "/postur", "/frettir"])
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::municipal()
    }
}
