//! The visible-row pipeline: search, filter, sort.

use std::collections::HashMap;

use super::Column;
use super::Direction;
use super::TableState;
use crate::model::Record;
use crate::model::Value;

/// Computes the currently visible rows of a table.
///
/// The three stages always run in this fixed order:
///
/// 1. **Search** — a non-empty search string keeps records where at least
///    one column's raw value, case-insensitively stringified, contains the
///    search string as a substring. A null (or missing) field never
///    matches. Only fields named by `columns` are searched.
/// 2. **Filter** — every set filter keeps records whose raw value equals
///    the filter value exactly. Filters compose with logical AND; an unset
///    filter imposes no constraint.
/// 3. **Sort** — when a sort is set, rows order by [`Value::compare`] on
///    the sort key, reversed for [`Direction::Desc`]. The sort is stable,
///    so records with equal keys keep their relative input order. No sort
///    means the post-filter rows stay in input order.
///
/// Sorting never changes which records are included; the result set is a
/// deterministic pure function of its inputs and the input slice is never
/// mutated. A filter or sort key naming a field no record has simply
/// matches nothing or leaves the order unchanged — there is no error path.
pub fn compute_visible<'a>(
    records: &'a [Record],
    columns: &[Column],
    state: &TableState,
) -> Vec<&'a Record> {
    let needle = state.search.trim().to_lowercase();

    let mut visible: Vec<&Record> = records
        .iter()
        .filter(|record| needle.is_empty() || matches_search(record, columns, &needle))
        .filter(|record| matches_filters(record, &state.filters))
        .collect();

    if let Some(sort) = &state.sort {
        visible.sort_by(|a, b| {
            let ordering = a.value_of(&sort.key).compare(b.value_of(&sort.key));
            match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
    }

    visible
}

fn matches_search(record: &Record, columns: &[Column], needle: &str) -> bool {
    columns.iter().any(|column| {
        let value = record.value_of(&column.key);
        if value.is_null() {
            return false;
        }
        value.display().to_lowercase().contains(needle)
    })
}

fn matches_filters(record: &Record, filters: &HashMap<String, Value>) -> bool {
    filters
        .iter()
        .all(|(key, value)| record.value_of(key) == value)
}
