//! The students page, with residency tabs.

use commune_lib::i18n::I18n;
use commune_lib::model::Record;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;
use crate::data::SVEITARFELAG;

pub fn page(data: &DataSet, i18n: &I18n, tab: Option<&str>) -> Page {
    let sveitarfelag_heimili = format!(
        "{} ({})",
        i18n.t("nemendur.sveitarfelag"),
        i18n.t("nemendur.heimili").to_lowercase()
    );
    let sveitarfelag_skola = format!(
        "{} ({})",
        i18n.t("nemendur.sveitarfelag"),
        i18n.t("nemendur.skoli").to_lowercase()
    );

    Page {
        title_key: "nemendur.titill",
        description_key: "nemendur.lysing",
        columns: vec![
            Column::new("nafn", i18n.t("nemendur.nafn")),
            Column::new("kennitala", i18n.t("nemendur.kennitala")),
            Column::new("kyn", i18n.t("nemendur.kyn")),
            Column::new("argangur", i18n.t("nemendur.argangur")),
            Column::new("skoli", i18n.t("nemendur.skoli")),
            Column::new("sveitarfelag", sveitarfelag_heimili.clone()),
            Column::new("sveitarfelag_skola", sveitarfelag_skola.clone()),
            Column::new("heimili", i18n.t("nemendur.heimili")),
            Column::new("netfang", i18n.t("nemendur.netfang")),
        ],
        filters: vec![
            FilterSpec::new("skoli", i18n.t("nemendur.skoli")),
            FilterSpec::new("argangur", i18n.t("nemendur.argangur")),
            FilterSpec::new("kyn", i18n.t("nemendur.kyn")),
            FilterSpec::new("sveitarfelag", sveitarfelag_heimili),
            FilterSpec::new("sveitarfelag_skola", sveitarfelag_skola),
        ],
        records: tab_records(&data.nemendur, tab.unwrap_or("allir")),
        selectable: false,
        summary: None,
    }
}

/// Narrows the student set to one residency tab.
///
/// `heima`: live in the municipality and attend school there. `i_odru`:
/// live here, attend school elsewhere. `ur_odru`: live elsewhere, attend
/// school here. Anything else is the "all" tab.
fn tab_records(nemendur: &[Record], tab: &str) -> Vec<Record> {
    let home = |r: &Record, field: &str| r.value_of(field).display() == SVEITARFELAG;
    nemendur
        .iter()
        .filter(|n| match tab {
            "heima" => home(n, "sveitarfelag") && home(n, "sveitarfelag_skola"),
            "i_odru" => home(n, "sveitarfelag") && !home(n, "sveitarfelag_skola"),
            "ur_odru" => !home(n, "sveitarfelag") && home(n, "sveitarfelag_skola"),
            _ => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, heimili: &str, skoli: &str) -> Record {
        Record::new(id)
            .set("sveitarfelag", heimili)
            .set("sveitarfelag_skola", skoli)
    }

    #[test]
    fn test_residency_tabs() {
        let nemendur = vec![
            student("1", SVEITARFELAG, SVEITARFELAG),
            student("2", SVEITARFELAG, "Árborg"),
            student("3", "Árborg", SVEITARFELAG),
        ];

        let ids = |tab: &str| -> Vec<String> {
            tab_records(&nemendur, tab)
                .iter()
                .map(|r| r.id().to_string())
                .collect()
        };

        assert_eq!(ids("allir"), ["1", "2", "3"]);
        assert_eq!(ids("heima"), ["1"]);
        assert_eq!(ids("i_odru"), ["2"]);
        assert_eq!(ids("ur_odru"), ["3"]);
    }
}
