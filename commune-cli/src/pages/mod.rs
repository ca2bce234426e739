//! One module per list page.
//!
//! Each page declares its columns and filters the way the browser pages
//! did, hands the matching record set to the table engine, and leaves the
//! rendering to [`crate::render`]. The overview dashboard has no table and
//! renders itself.

pub mod adstandendur;
pub mod astundun;
pub mod nemendur;
pub mod overview;
pub mod skolar;
pub mod starfsmenn;
pub mod vinnuskyrslur;

use commune_lib::i18n::I18n;
use commune_lib::model::Record;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use crate::data::DataSet;

/// Page-level switches that narrow records or columns before the table
/// engine runs.
#[derive(Debug, Default)]
pub struct PageOptions {
    /// Students residency tab.
    pub tab: Option<String>,
    /// Work-report column group ids.
    pub groups: Option<String>,
    /// Attendance school narrowing.
    pub school: Option<String>,
    /// Attendance flagged-only narrowing.
    pub flagged: bool,
}

/// Everything a list page hands to the table pipeline.
pub struct Page {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub columns: Vec<Column>,
    pub filters: Vec<FilterSpec>,
    pub records: Vec<Record>,
    /// Whether the page supports row selection.
    pub selectable: bool,
    /// Extra text under the table (attendance summary).
    pub summary: Option<String>,
}

/// Builds the list page behind a route, or `None` when the route has no
/// list page.
pub fn build(route: &str, data: &DataSet, i18n: &I18n, options: &PageOptions) -> Option<Page> {
    match route {
        "/skolar" => Some(skolar::page(data, i18n)),
        "/nemendur" => Some(nemendur::page(data, i18n, options.tab.as_deref())),
        "/adstandendur" => Some(adstandendur::page(data, i18n)),
        "/starfsmenn" => Some(starfsmenn::page(data, i18n)),
        "/vinnuskyrslur" => Some(vinnuskyrslur::page(data, i18n, options.groups.as_deref())),
        "/astundun" => Some(astundun::page(
            data,
            i18n,
            options.school.as_deref(),
            options.flagged,
        )),
        _ => None,
    }
}
