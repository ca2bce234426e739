//! The work-reports page: five column groups and row selection.

use commune_lib::i18n::I18n;
use commune_lib::table::Column;
use commune_lib::table::FilterSpec;

use super::Page;
use crate::data::DataSet;

/// The default visible groups when `--groups` is not given.
const DEFAULT_GROUPS: &str = "grunnupplysingar,radningoglaun";

pub fn page(data: &DataSet, i18n: &I18n, groups: Option<&str>) -> Page {
    Page {
        title_key: "vinnuskyrslur.titill",
        description_key: "vinnuskyrslur.lysing",
        columns: group_columns(groups.unwrap_or(DEFAULT_GROUPS)),
        filters: vec![
            FilterSpec::new("nafnSkola", "Skóli"),
            FilterSpec::new("launaflokkur", "Launaflokkur"),
            FilterSpec::new("starfsheitiLauna", "Starfsheiti"),
            FilterSpec::new("grunrodun", "Grunnröðun"),
        ],
        records: data.vinnuskyrslur.clone(),
        selectable: true,
        summary: None,
    }
}

/// The columns of every active group, in group order.
///
/// Unknown group ids are skipped; an empty selection still shows the basic
/// columns so the table never renders without identity fields.
fn group_columns(active: &str) -> Vec<Column> {
    let active: Vec<String> = active
        .split(',')
        .map(|id| id.trim().to_lowercase())
        .filter(|id| !id.is_empty())
        .collect();

    let mut columns: Vec<Column> = GROUPS
        .iter()
        .filter(|(id, _)| active.iter().any(|a| a == id))
        .flat_map(|(_, columns)| columns.iter())
        .map(|(key, label)| Column::new(*key, *label))
        .collect();

    if columns.is_empty() {
        columns = GROUPS[0]
            .1
            .iter()
            .map(|(key, label)| Column::new(*key, *label))
            .collect();
    }
    columns
}

/// `(group id, [(column key, label)])` in display order.
static GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "grunnupplysingar",
        &[
            ("nafnSkola", "Skóli"),
            ("kennitalaSkola", "Kt. skóla"),
            ("nafn", "Nafn"),
            ("kennitala", "Kennitala"),
            ("starfsheitiLauna", "Starfsheiti"),
        ],
    ),
    (
        "radningoglaun",
        &[
            ("radpinahlutfall", "Ráðn.hlutfall %"),
            ("launahlutfall", "Launahlutfall %"),
            ("launaflokkur", "Launaflokkur"),
            ("grunrodun", "Grunnröðun"),
            ("personualag", "Persónuálag"),
            ("afslattur", "Afsláttur"),
            ("afslAlls", "Afsl. alls"),
        ],
    ),
    (
        "menntunogreynsla",
        &[
            ("profLeyfisbrief", "Próf/Leyfisbréf"),
            ("leidbeinandi", "Leiðbeinandi"),
            ("simenntun", "Símenntun"),
            ("simenntunFerEftir", "Símenntun fer eftir"),
            ("kennsluferill", "Kennsluferill"),
            ("stjornunarreynsla", "Stjórnunarreynsla"),
        ],
    ),
    (
        "kennsla",
        &[
            ("allsKennsla", "Alls kennsla"),
            ("almennKennsla", "Almenn kennsla"),
            ("onnurKennsla", "Önnur kennsla"),
            ("serkennsla", "Sérkennsla"),
            ("sertaekSerkennsla", "Sértæk sérkennsla"),
            ("serdeild", "Sérdeild"),
            ("nybuakennsla", "Nýbúakennsla"),
            ("taknmalssvid", "Táknmálssvið"),
            ("tonmennt", "Tónmennt"),
        ],
    ),
    (
        "yfirvinna",
        &[
            ("allsYfirvinna", "Alls yfirvinna"),
            ("yfirvinnaAlls", "Yfirvinna alls"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups_are_basics_and_salary() {
        let columns = group_columns(DEFAULT_GROUPS);
        assert_eq!(columns.len(), 12);
        assert_eq!(columns[0].key, "nafnSkola");
        assert_eq!(columns[5].key, "radpinahlutfall");
    }

    #[test]
    fn test_unknown_group_falls_back_to_basics() {
        let columns = group_columns("ekki_til");
        assert_eq!(columns.len(), 5);
    }

    #[test]
    fn test_group_order_is_fixed() {
        // Requesting groups out of order still yields display order.
        let columns = group_columns("yfirvinna,grunnupplysingar");
        assert_eq!(columns[0].key, "nafnSkola");
        assert_eq!(columns.last().unwrap().key, "yfirvinnaAlls");
    }
}
