//! Fail-closed behavior of the access gate and the municipal policy.

use commune_lib::access::AccessGate;
use commune_lib::access::AccessPolicy;
use commune_lib::access::PageDecision;
use commune_lib::access::User;
use commune_lib::access::default_nav;
use commune_lib::access::role;

#[test]
fn unknown_role_has_no_access() {
    let gate = AccessGate::new(AccessPolicy::municipal());
    assert!(!gate.has_access("unknown-role", "/any-route"));
    assert!(!gate.has_access("", "/"));
}

#[test]
fn no_user_redirects_to_login() {
    let gate = AccessGate::new(AccessPolicy::municipal());
    assert_eq!(
        gate.guard_page(None, "/", None),
        PageDecision::RedirectToLogin
    );
}

#[test]
fn admin_sees_every_route() {
    let gate = AccessGate::new(AccessPolicy::municipal());
    for route in ["/", "/nemendur", "/vinnuskyrslur", "/frettir", "/hvað-sem-er"] {
        assert!(gate.has_access(role::ADMIN, route), "admin denied {route}");
    }
}

#[test]
fn municipal_roles_see_their_own_pages() {
    let gate = AccessGate::new(AccessPolicy::municipal());

    assert!(gate.has_access(role::SKOLASKRIFSTOFA, "/nemendur"));
    assert!(!gate.has_access(role::SKOLASKRIFSTOFA, "/vinnuskyrslur"));

    assert!(gate.has_access(role::STARFSMANNASTJORI, "/vinnuskyrslur"));
    assert!(!gate.has_access(role::STARFSMANNASTJORI, "/nemendur"));

    assert!(gate.has_access(role::SAMSKIPTI, "/postur"));
    assert!(!gate.has_access(role::SAMSKIPTI, "/astundun"));
}

#[test]
fn guard_page_decision_ladder() {
    let gate = AccessGate::new(AccessPolicy::municipal());
    let hr = User::new("Helga", role::STARFSMANNASTJORI);

    assert_eq!(
        gate.guard_page(Some(&hr), "/vinnuskyrslur", None),
        PageDecision::Allow
    );
    // required_role beats the route policy.
    assert_eq!(
        gate.guard_page(Some(&hr), "/vinnuskyrslur", Some(role::ADMIN)),
        PageDecision::Forbidden
    );
    assert_eq!(
        gate.guard_page(Some(&hr), "/nemendur", None),
        PageDecision::Forbidden
    );
}

#[test]
fn filter_nav_preserves_order() {
    let gate = AccessGate::new(AccessPolicy::municipal());
    let nav = default_nav();

    let visible = gate.filter_nav(&nav, role::SKOLASKRIFSTOFA);
    let routes: Vec<&str> = visible.iter().map(|i| i.route.as_str()).collect();
    assert_eq!(
        routes,
        ["/", "/skolar", "/nemendur", "/adstandendur", "/astundun"]
    );

    assert!(gate.filter_nav(&nav, "unknown-role").is_empty());
    assert_eq!(gate.filter_nav(&nav, role::ADMIN).len(), nav.len());
}
