//! The schools page.

use commune_lib::i18n::I18n;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;

pub fn page(data: &DataSet, i18n: &I18n) -> Page {
    Page {
        title_key: "skolar.titill",
        description_key: "skolar.lysing",
        columns: vec![
            Column::new("nafn", i18n.t("skolar.nafn")),
            Column::new("nemendafjoldi", i18n.t("skolar.nemendafjoldi")),
            Column::new("starfsmannafjoldi", i18n.t("skolar.starfsmannafjoldi")),
            Column::new("skolastjori", i18n.t("skolar.skolastjori")),
            Column::new("heimilisfang", i18n.t("skolar.heimilisfang")),
            Column::new("postnumer", i18n.t("skolar.postnumer")),
            Column::new("simi", i18n.t("skolar.simi")),
            Column::new("netfang", i18n.t("skolar.netfang")),
        ],
        filters: vec![
            FilterSpec::new("rekstraradili", i18n.t("skolar.rekstraradili")),
            FilterSpec::new("postnumer", i18n.t("skolar.postnumer")),
        ],
        records: data.skolar.clone(),
        selectable: false,
        summary: None,
    }
}
