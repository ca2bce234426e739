//! The guardians page.

use commune_lib::i18n::I18n;
use commune_lib::model::Value;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;

pub fn page(data: &DataSet, i18n: &I18n) -> Page {
    Page {
        title_key: "adstandendur.titill",
        description_key: "adstandendur.lysing",
        columns: vec![
            Column::new("nafn", i18n.t("adstandendur.nafn")),
            Column::new("kennitala", i18n.t("adstandendur.kennitala")),
            Column::new("tengsl", i18n.t("adstandendur.tengsl")),
            Column::new("forsja", i18n.t("adstandendur.forsja")),
            Column::new("adaltengilid", i18n.t("adstandendur.adaltengilidir")),
            Column::new("heimili", i18n.t("adstandendur.heimili")),
            Column::new("simi", i18n.t("adstandendur.simi")),
            Column::new("farsimi", i18n.t("adstandendur.farsimi")),
            Column::new("netfang", i18n.t("adstandendur.netfang")),
            Column::new("vinnustadur", i18n.t("adstandendur.vinnustadur")),
            Column::new("vinnusimi", i18n.t("adstandendur.vinnusimi")),
            // Children render as a comma list, or a dash when none.
            Column::new("nemendur", i18n.t("adstandendur.nempidar")).render(|value, _| {
                match value {
                    Value::Null => "-".to_string(),
                    other => other.display(),
                }
            }),
        ],
        filters: vec![
            FilterSpec::new("tengsl", i18n.t("adstandendur.tengsl")),
            FilterSpec::new("forsja", i18n.t("adstandendur.forsja")),
            FilterSpec::new("adaltengilid", i18n.t("adstandendur.adaltengilidir")),
        ],
        records: data.adstandendur.clone(),
        selectable: false,
        summary: None,
    }
}
