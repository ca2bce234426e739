//! The overview dashboard: headline figures and the school list.

use std::fmt::Write;

use commune_lib::i18n::I18n;
use commune_lib::stats::Overview;

use crate::data::DataSet;

pub fn render(data: &DataSet, i18n: &I18n) -> String {
    let overview = Overview::compute(&data.skolar, &data.adstandendur);

    let mut out = String::new();
    let _ = writeln!(out, "{}", i18n.t("dashboard.titill"));
    let _ = writeln!(out, "{}\n", i18n.t("dashboard.lysing"));

    let _ = writeln!(out, "{}: {}", i18n.t("dashboard.fjoldiSkola"), overview.schools);
    let _ = writeln!(
        out,
        "{}: {}",
        i18n.t("dashboard.heildarfjoldiNemenda"),
        overview.students
    );
    let _ = writeln!(
        out,
        "{}: {}",
        i18n.t("dashboard.heildarfjoldiStarfsmanna"),
        overview.staff
    );
    let _ = writeln!(out, "{}: {}", i18n.t("nav.adstandendur"), overview.guardians);

    let _ = writeln!(out, "\n{}:", i18n.t("nav.skolar"));
    for skoli in &data.skolar {
        let _ = writeln!(
            out,
            "  {} ({}, {} {})",
            skoli.value_of("nafn").display(),
            skoli.value_of("heimilisfang").display(),
            skoli.value_of("nemendafjoldi").display(),
            i18n.t("nav.nemendur").to_lowercase(),
        );
    }
    out
}
