//! Excel export: an HTML table document Excel opens as a worksheet.

use std::fmt::Write;

use super::cell_text;
use crate::model::Record;
use crate::table::Column;

/// Builds an Excel-openable `.xls` document from the visible rows.
///
/// The document is an HTML table in the
/// `urn:schemas-microsoft-com:office:excel` namespace with a worksheet
/// options comment block, which is what Excel expects from the HTML route.
/// All cell text is HTML-escaped; lists and nulls render as in CSV.
pub fn write_excel(records: &[&Record], columns: &[Column]) -> String {
    let mut headers = String::new();
    for column in columns {
        let _ = write!(headers, "<th>{}</th>", escape_html(&column.label));
    }

    let mut rows = String::new();
    for record in records {
        rows.push_str("<tr>");
        for column in columns {
            let text = cell_text(record.value_of(&column.key));
            let _ = write!(rows, "<td>{}</td>", escape_html(&text));
        }
        rows.push_str("</tr>");
    }

    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:x="urn:schemas-microsoft-com:office:excel">
<head>
<meta charset="UTF-8">
<!--[if gte mso 9]>
<xml>
<x:ExcelWorkbook>
<x:ExcelWorksheets>
<x:ExcelWorksheet>
<x:Name>Sheet1</x:Name>
<x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions>
</x:ExcelWorksheet>
</x:ExcelWorksheets>
</x:ExcelWorkbook>
</xml>
<![endif]-->
</head>
<body>
<table border="1">
<thead><tr>{headers}</tr></thead>
<tbody>{rows}</tbody>
</table>
</body>
</html>"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_envelope() {
        let doc = write_excel(&[], &[Column::new("nafn", "Nafn")]);
        assert!(doc.contains("urn:schemas-microsoft-com:office:excel"));
        assert!(doc.contains("<x:ExcelWorksheet>"));
        assert!(doc.contains("<thead><tr><th>Nafn</th></tr></thead>"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let record = Record::new("s1").set("deild", "Stærðfræði & raungreinar <1>");
        let records = vec![&record];

        let doc = write_excel(&records, &[Column::new("deild", "Deild")]);
        assert!(doc.contains("<td>Stærðfræði &amp; raungreinar &lt;1&gt;</td>"));
    }
}
