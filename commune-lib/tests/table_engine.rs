//! Properties of the visible-row pipeline and row selection.

use std::collections::HashSet;

use commune_lib::model::Record;
use commune_lib::table::Column;
use commune_lib::table::Direction;
use commune_lib::table::FilterSpec;
use commune_lib::table::TableState;
use commune_lib::table::compute_visible;
use commune_lib::table::filter_options;

fn students() -> Vec<Record> {
    vec![
        Record::new("1").set("nafn", "Anna").set("skoli", "A"),
        Record::new("2").set("nafn", "Björn").set("skoli", "B"),
        Record::new("3").set("nafn", "Anna").set("skoli", "B"),
    ]
}

fn columns() -> Vec<Column> {
    vec![Column::new("nafn", "Nafn"), Column::new("skoli", "Skóli")]
}

fn ids(visible: &[&Record]) -> Vec<String> {
    visible.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn search_narrows_to_a_subset() {
    let records = students();
    let columns = columns();

    let mut state = TableState::new();
    let all: HashSet<String> = ids(&compute_visible(&records, &columns, &state))
        .into_iter()
        .collect();

    for needle in ["a", "anna", "björn", "x", ""] {
        state.set_search(needle);
        let searched = ids(&compute_visible(&records, &columns, &state));
        assert!(
            searched.iter().all(|id| all.contains(id)),
            "search '{needle}' produced a record not in the unsearched set"
        );
    }
}

#[test]
fn filters_compose_independently_of_set_order() {
    let records = students();
    let columns = columns();

    let mut first = TableState::new();
    first.set_filter("nafn", "Anna");
    first.set_filter("skoli", "B");

    let mut second = TableState::new();
    second.set_filter("skoli", "B");
    second.set_filter("nafn", "Anna");

    assert_eq!(
        ids(&compute_visible(&records, &columns, &first)),
        ids(&compute_visible(&records, &columns, &second))
    );
}

#[test]
fn sort_preserves_set_membership() {
    let records = students();
    let columns = columns();

    let mut state = TableState::new();
    let before: HashSet<String> = ids(&compute_visible(&records, &columns, &state))
        .into_iter()
        .collect();

    for key in ["nafn", "skoli", "ekki_til"] {
        state.toggle_sort(&columns, key);
        let after: HashSet<String> = ids(&compute_visible(&records, &columns, &state))
            .into_iter()
            .collect();
        assert_eq!(before, after, "sorting by '{key}' changed the visible set");
    }
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let records = students();
    let columns = columns();

    // Records 1 and 3 share nafn "Anna"; stable sort keeps 1 before 3.
    let mut state = TableState::new();
    state.toggle_sort(&columns, "nafn");
    assert_eq!(ids(&compute_visible(&records, &columns, &state)), ["1", "3", "2"]);
}

#[test]
fn toggle_sort_flips_direction_and_ignores_unsortable() {
    let columns = vec![
        Column::new("nafn", "Nafn"),
        Column::new("kennitala", "Kennitala").unsortable(),
    ];
    let mut state = TableState::new();

    state.toggle_sort(&columns, "nafn");
    assert_eq!(state.sort.as_ref().unwrap().direction, Direction::Asc);
    state.toggle_sort(&columns, "nafn");
    assert_eq!(state.sort.as_ref().unwrap().direction, Direction::Desc);

    state.toggle_sort(&columns, "kennitala");
    assert_eq!(state.sort.as_ref().unwrap().key, "nafn");
    state.toggle_sort(&columns, "ekki_til");
    assert_eq!(state.sort.as_ref().unwrap().key, "nafn");
}

#[test]
fn selection_survives_visibility_changes() {
    let records = students();
    let columns = columns();

    let mut state = TableState::with_selection();
    state.toggle_select_one("2");

    // Hide record 2, selection must survive.
    state.set_search("anna");
    let visible = compute_visible(&records, &columns, &state);
    assert!(!ids(&visible).contains(&"2".to_string()));
    assert!(state.selection.is_selected("2"));

    // Re-widen; still selected.
    state.set_search("");
    assert!(state.selection.is_selected("2"));
}

#[test]
fn toggle_select_all_only_touches_visible_rows() {
    let records = students();
    let columns = columns();

    let mut state = TableState::with_selection();
    state.set_filter("skoli", "A");

    let visible = compute_visible(&records, &columns, &state);
    assert_eq!(ids(&visible), ["1"]);

    state.toggle_select_all(&visible);
    assert!(state.selection.is_selected("1"));
    assert!(!state.selection.is_selected("2"));
    assert!(!state.selection.is_selected("3"));

    // Toggling again removes exactly the visible id.
    state.toggle_select_all(&visible);
    assert!(state.selection.is_empty());
}

#[test]
fn derived_selection_flags() {
    let records = students();
    let columns = columns();

    let mut state = TableState::with_selection();
    let visible = compute_visible(&records, &columns, &state);

    assert!(!state.all_selected(&visible));
    assert!(!state.some_selected(&visible));

    state.toggle_select_one("1");
    assert!(!state.all_selected(&visible));
    assert!(state.some_selected(&visible));

    state.toggle_select_one("2");
    state.toggle_select_one("3");
    assert!(state.all_selected(&visible));
    assert!(!state.some_selected(&visible));
}

#[test]
fn end_to_end_icelandic_scenario() {
    let records = students();
    let columns = columns();
    let mut state = TableState::new();

    state.set_search("anna");
    assert_eq!(ids(&compute_visible(&records, &columns, &state)), ["1", "3"]);

    state.set_filter("skoli", "B");
    assert_eq!(ids(&compute_visible(&records, &columns, &state)), ["3"]);

    state.toggle_sort(&columns, "nafn");
    assert_eq!(state.sort.as_ref().unwrap().direction, Direction::Asc);
    assert_eq!(ids(&compute_visible(&records, &columns, &state)), ["3"]);
}

#[test]
fn clear_all_filters_restores_the_prefilter_set() {
    let records = students();
    let columns = columns();

    let mut state = TableState::new();
    state.set_search("anna");
    let before = ids(&compute_visible(&records, &columns, &state));

    state.set_filter("skoli", "B");
    state.set_filter("nafn", "Anna");
    state.clear_all_filters();

    assert_eq!(ids(&compute_visible(&records, &columns, &state)), before);
}

#[test]
fn unknown_filter_key_matches_nothing() {
    let records = students();
    let columns = columns();

    let mut state = TableState::new();
    state.set_filter("deild", "Stærðfræði");
    assert!(compute_visible(&records, &columns, &state).is_empty());
}

#[test]
fn filter_options_are_distinct_sorted_and_non_empty() {
    let mut records = students();
    records.push(Record::new("4").set("nafn", "").set("skoli", "A"));

    let options = filter_options(&records, &FilterSpec::new("skoli", "Skóli"));
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].display(), "A");
    assert_eq!(options[1].display(), "B");

    // The empty nafn is not an option.
    let names = filter_options(&records, &FilterSpec::new("nafn", "Nafn"));
    assert_eq!(names.len(), 2);
}
