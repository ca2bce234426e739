//! Plain-text rendering of tables and summaries.

use commune_lib::i18n::I18n;
use commune_lib::model::Record;
use commune_lib::table::Column;
use commune_lib::table::TableState;

/// Renders the visible rows as a width-aligned text table with a
/// `"N af M færslum"` footer.
///
/// Cells go through each column's renderer; widths count characters, not
/// bytes, so Icelandic text lines up.
pub fn table(
    columns: &[Column],
    visible: &[&Record],
    total: usize,
    state: &TableState,
    i18n: &I18n,
) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(visible.len() + 1);
    rows.push(columns.iter().map(|c| c.label.clone()).collect());
    for record in visible {
        rows.push(columns.iter().map(|c| c.cell(record)).collect());
    }

    let mut widths = vec![0usize; columns.len()];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
        if index == 0 {
            let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len().saturating_sub(1));
            out.push_str(&"-".repeat(rule_len));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&footer(visible.len(), total, state, i18n));
    out.push('\n');
    out
}

fn pad(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(padding))
}

fn footer(shown: usize, total: usize, state: &TableState, i18n: &I18n) -> String {
    let mut footer = format!(
        "{shown} {} {total} {}",
        i18n.t("common.af"),
        i18n.t("common.faerslur")
    );
    if state.selection.is_enabled() && !state.selection.is_empty() {
        footer.push_str(&format!(
            " ({} {})",
            state.selection.len(),
            i18n.t("common.valdir")
        ));
    }
    footer
}

/// A page heading: the title line and its description.
pub fn heading(title_key: &str, description_key: &str, i18n: &I18n) -> String {
    format!("{}\n{}\n", i18n.t(title_key), i18n.t(description_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use commune_lib::i18n::Language;

    #[test]
    fn test_footer_counts_and_alignment() {
        let columns = vec![Column::new("nafn", "Nafn"), Column::new("skoli", "Skóli")];
        let records = [
            Record::new("1").set("nafn", "Anna").set("skoli", "Austurskóli"),
            Record::new("2").set("nafn", "Björn").set("skoli", "A"),
        ];
        let visible: Vec<&Record> = records.iter().collect();

        let out = table(
            &columns,
            &visible,
            5,
            &TableState::new(),
            &I18n::new(Language::Is),
        );
        assert!(out.contains("2 af 5 færslum"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Nafn   Skóli");
        assert_eq!(lines[2], "Anna   Austurskóli");
    }
}
