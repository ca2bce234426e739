//! Navigation menu configuration.

/// One navigation menu entry: a route and the translation key of its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Route path, e.g. `/nemendur`.
    pub route: String,
    /// Translation key for the menu label, e.g. `nav.nemendur`.
    pub label_key: String,
}

impl NavItem {
    /// Creates a navigation item.
    pub fn new(route: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            label_key: label_key.into(),
        }
    }
}

/// The sidebar menu in display order.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("/", "nav.yfirlit"),
        NavItem::new("/skolar", "nav.skolar"),
        NavItem::new("/nemendur", "nav.nemendur"),
        NavItem::new("/adstandendur", "nav.adstandendur"),
        NavItem::new("/starfsmenn", "nav.starfsmenn"),
        NavItem::new("/vinnuskyrslur", "nav.vinnuskyrslur"),
        NavItem::new("/astundun", "nav.astundun"),
        NavItem::new("/postur", "nav.fjoldapostur"),
        NavItem::new("/frettir", "nav.frettir"),
    ]
}
