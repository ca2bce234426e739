//! The attendance page: absence percentages, flag markers, and the
//! per-school summary.

use std::fmt::Write;

use commune_lib::i18n::I18n;
use commune_lib::model::Record;
use commune_lib::stats;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;

pub fn page(data: &DataSet, i18n: &I18n, school: Option<&str>, flagged_only: bool) -> Page {
    let records = enriched_records(&data.astundun, school, flagged_only);
    let refs: Vec<&Record> = records.iter().collect();
    let summary = summary(&refs, i18n);

    Page {
        title_key: "astundun.titill",
        description_key: "astundun.lysing",
        columns: columns(i18n),
        filters: vec![
            FilterSpec::new("skoli", i18n.t("astundun.skoli")),
            FilterSpec::new("argangur", i18n.t("astundun.argangur")),
            FilterSpec::new("manudur", i18n.t("astundun.manudur")),
        ],
        records,
        selectable: false,
        summary: Some(summary),
    }
}

fn columns(i18n: &I18n) -> Vec<Column> {
    vec![
        // Flagged students get a marker in front of their name.
        Column::new("nafn", i18n.t("astundun.nafn")).render(|value, record| {
            if stats::is_flagged(record) {
                format!("[!] {}", value.display())
            } else {
                value.display()
            }
        }),
        Column::new("kennitala", i18n.t("astundun.kennitala")),
        Column::new("skoli", i18n.t("astundun.skoli")),
        Column::new("argangur", i18n.t("astundun.argangur")),
        Column::new("manudur", i18n.t("astundun.manudur")),
        Column::new("fjarvistir", i18n.t("astundun.fjarvistir")),
        Column::new("seint", i18n.t("astundun.seint")),
        Column::new("leyfi", i18n.t("astundun.leyfi")),
        Column::new("veikindi", i18n.t("astundun.veikindi")),
        Column::new("kennslustundir", i18n.t("astundun.kennslustundir")),
        Column::new("maett", i18n.t("astundun.maett")),
        Column::new("fjarvistarHlutfall", i18n.t("astundun.fjarveraProsen"))
            .render(|value, _| format!("{}%", value.display())),
    ]
}

/// Clones the attendance set with the derived `fjarvistarHlutfall` field
/// added, narrowed by school and flag status.
fn enriched_records(astundun: &[Record], school: Option<&str>, flagged_only: bool) -> Vec<Record> {
    astundun
        .iter()
        .filter(|r| school.is_none_or(|s| r.value_of("skoli").display() == s))
        .filter(|r| !flagged_only || stats::is_flagged(r))
        .map(|r| {
            let mut record = r.clone();
            record.insert("fjarvistarHlutfall", stats::absence_percent(r));
            record
        })
        .collect()
}

/// The headline figures and the per-school totals table.
fn summary(records: &[&Record], i18n: &I18n) -> String {
    let figures = stats::stats(records);

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", i18n.t("astundun.nempidar"), figures.students);
    let _ = writeln!(out, "{}: {}", i18n.t("astundun.flaggadir"), figures.flagged);
    let _ = writeln!(
        out,
        "{}: {}",
        i18n.t("astundun.medaltalNem"),
        figures.average_per_student
    );

    let _ = writeln!(out, "\n{}:", i18n.t("astundun.samantektEftirSkolum"));
    for (school, totals) in stats::totals_by(records, "skoli") {
        let _ = writeln!(
            out,
            "  {school}: {} {}, {} {}, {} {}, {} {} ({} {})",
            totals.fjarvistir,
            i18n.t("astundun.fjarvistir").to_lowercase(),
            totals.seint,
            i18n.t("astundun.seint").to_lowercase(),
            totals.leyfi,
            i18n.t("astundun.leyfi").to_lowercase(),
            totals.veikindi,
            i18n.t("astundun.veikindi").to_lowercase(),
            totals.sum(),
            i18n.t("astundun.samtals").to_lowercase(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, school: &str, taught: i64, attended: i64) -> Record {
        Record::new(id)
            .set("nemandaId", id)
            .set("skoli", school)
            .set("kennslustundir", taught)
            .set("maett", attended)
            .set("fjarvistir", taught - attended)
            .set("seint", 0i64)
            .set("leyfi", 0i64)
            .set("veikindi", 0i64)
    }

    #[test]
    fn test_enrichment_adds_percentage() {
        let records = enriched_records(&[record("a1", "Austurskóli", 160, 140)], None, false);
        assert_eq!(records[0].get_float("fjarvistarHlutfall").unwrap(), Some(12.5));
    }

    #[test]
    fn test_school_and_flag_narrowing() {
        let all = [
            record("a1", "Austurskóli", 160, 140), // 12.5%, flagged
            record("a2", "Austurskóli", 160, 158),
            record("a3", "Vesturskóli", 160, 130),
        ];

        assert_eq!(enriched_records(&all, Some("Austurskóli"), false).len(), 2);
        assert_eq!(enriched_records(&all, Some("Austurskóli"), true).len(), 1);
        assert_eq!(enriched_records(&all, None, true).len(), 2);
    }
}
