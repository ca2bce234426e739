//! The staff page.

use commune_lib::i18n::I18n;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;

pub fn page(data: &DataSet, i18n: &I18n) -> Page {
    Page {
        title_key: "starfsmenn.titill",
        description_key: "starfsmenn.lysing",
        columns: vec![
            Column::new("nafn", i18n.t("starfsmenn.nafn")),
            Column::new("kennitala", i18n.t("starfsmenn.kennitala")),
            Column::new("stada", i18n.t("starfsmenn.deild")),
            Column::new("deild", i18n.t("starfsmenn.deild")),
            Column::new("skoli", i18n.t("starfsmenn.skoli")),
            Column::new("starfshlutfall", i18n.t("starfsmenn.starfshlutfall")),
            Column::new("menntun", i18n.t("starfsmenn.menntun")),
            Column::new("radningardagur", i18n.t("starfsmenn.radningardagur")),
            Column::new("heimili", i18n.t("starfsmenn.heimili")),
            Column::new("netfang", i18n.t("starfsmenn.netfang")),
            Column::new("simi", i18n.t("starfsmenn.simi")),
            Column::new("farsimi", i18n.t("starfsmenn.farsimi")),
        ],
        filters: vec![
            FilterSpec::new("skoli", i18n.t("starfsmenn.skoli")),
            FilterSpec::new("stada", i18n.t("starfsmenn.deild")),
            FilterSpec::new("deild", i18n.t("starfsmenn.deild")),
            FilterSpec::new("starfshlutfall", i18n.t("starfsmenn.starfshlutfall")),
        ],
        records: data.starfsmenn.clone(),
        selectable: false,
        summary: None,
    }
}
