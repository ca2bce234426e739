//! CSV export.

use super::cell_text;
use crate::model::Record;
use crate::table::Column;

/// The UTF-8 byte order mark. Excel needs it to detect the encoding of a
/// CSV file containing Icelandic characters.
const BOM: char = '\u{FEFF}';

/// Builds a CSV document from the visible rows.
///
/// The header row carries the column labels. A cell containing a comma,
/// quote, or newline is wrapped in quotes with inner quotes doubled; other
/// cells are written as-is. Rows are joined with `\n` and the whole output
/// is prefixed with the UTF-8 BOM.
pub fn write_csv(records: &[&Record], columns: &[Column]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header: Vec<String> = columns.iter().map(|c| escape(&c.label)).collect();
    lines.push(header.join(","));

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape(&cell_text(record.value_of(&c.key))))
            .collect();
        lines.push(cells.join(","));
    }

    format!("{BOM}{}", lines.join("\n"))
}

fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("nafn", "Nafn"),
            Column::new("nemendur", "Barn"),
            Column::new("netfang", "Netfang"),
        ]
    }

    #[test]
    fn test_header_and_bom() {
        let csv = write_csv(&[], &columns());
        assert_eq!(csv, "\u{FEFF}Nafn,Barn,Netfang");
    }

    #[test]
    fn test_quoting_lists_and_nulls() {
        let record = Record::new("a1")
            .set("nafn", "Jónsdóttir, Guðrún")
            .set("nemendur", vec!["Anna", "Björn"])
            .set("netfang", Value::Null);
        let records = vec![&record];

        let csv = write_csv(&records, &columns());
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"Jónsdóttir, Guðrún\",Anna; Björn,");
    }

    #[test]
    fn test_inner_quotes_doubled() {
        let record = Record::new("a1").set("nafn", "\"Stubbur\"");
        let records = vec![&record];

        let csv = write_csv(&records, &[Column::new("nafn", "Nafn")]);
        assert!(csv.ends_with("\"\"\"Stubbur\"\"\""));
    }
}
