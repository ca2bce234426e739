//! Role-based access: the policy table, the gate, and the navigation menu.
//!
//! Authorization lives here and nowhere else — pages consult
//! [`AccessGate`] instead of re-deciding role visibility locally.

mod gate;
mod nav;
mod policy;

pub use gate::AccessGate;
pub use gate::PageDecision;
pub use gate::User;
pub use nav::NavItem;
pub use nav::default_nav;
pub use policy::AccessPolicy;
pub use policy::RouteAccess;
pub use policy::role;
