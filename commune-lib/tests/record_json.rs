//! The record-source contract: flat JSON objects with an `id` member.

use commune_lib::model::Record;
use commune_lib::model::Value;

#[test]
fn record_loads_from_flat_object() {
    let json = r#"{
        "id": "n1",
        "nafn": "Anna Sigurðardóttir",
        "argangur": 2012,
        "starfshlutfall": 87.5,
        "forsja": true,
        "netfang": null,
        "nemendur": ["Anna", "Björn"]
    }"#;

    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.id(), "n1");
    assert_eq!(record.get_string("nafn").unwrap(), Some("Anna Sigurðardóttir"));
    assert_eq!(record.get_int("argangur").unwrap(), Some(2012));
    assert_eq!(record.get_float("starfshlutfall").unwrap(), Some(87.5));
    assert_eq!(record.get_bool("forsja").unwrap(), Some(true));
    assert_eq!(record.get_string("netfang").unwrap(), None);
    assert_eq!(
        record.get_list("nemendur").unwrap().unwrap(),
        ["Anna", "Björn"]
    );
}

#[test]
fn numeric_ids_become_strings() {
    let record: Record = serde_json::from_str(r#"{"id": 7, "nafn": "Anna"}"#).unwrap();
    assert_eq!(record.id(), "7");
}

#[test]
fn missing_id_is_rejected() {
    let result: Result<Record, _> = serde_json::from_str(r#"{"nafn": "Anna"}"#);
    assert!(result.is_err());
}

#[test]
fn record_arrays_round_trip() {
    let records = vec![
        Record::new("1").set("nafn", "Anna").set("argangur", 2012i64),
        Record::new("2").set("nafn", "Björn").set("netfang", Value::Null),
    ];

    let json = serde_json::to_string(&records).unwrap();
    let back: Vec<Record> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, records);
}
