//! Vital entity tests

use domain_vital::{NewVital, Vital, VitalSortField};

fn sample() -> NewVital {
    NewVital {
        identifier: vec!["p1".to_string()],
        weight: "70kg".to_string(),
        height: "175cm".to_string(),
        general_examination: "normal".to_string(),
    }
}

#[test]
fn into_vital_attaches_the_id_and_nothing_else() {
    let vital = sample().into_vital(7);
    assert_eq!(vital.id, 7);
    assert_eq!(vital.identifier, vec!["p1".to_string()]);
    assert_eq!(vital.weight, "70kg");
    assert_eq!(vital.height, "175cm");
    assert_eq!(vital.general_examination, "normal");
}

#[test]
fn wire_shape_uses_camel_case() {
    let json = serde_json::to_value(sample().into_vital(1)).unwrap();
    assert!(json.get("generalExamination").is_some());
    assert!(json.get("general_examination").is_none());
}

#[test]
fn identifier_defaults_to_empty_when_omitted() {
    let parsed: NewVital = serde_json::from_str(
        r#"{"weight":"70kg","height":"175cm","generalExamination":"normal"}"#,
    )
    .unwrap();
    assert!(parsed.identifier.is_empty());
}

#[test]
fn sort_whitelist_accepts_wire_names_only() {
    assert_eq!(VitalSortField::parse("id"), Some(VitalSortField::Id));
    assert_eq!(
        VitalSortField::parse("generalExamination"),
        Some(VitalSortField::GeneralExamination)
    );
    assert_eq!(VitalSortField::parse("general_examination"), None);
    assert_eq!(VitalSortField::parse("identifier"), None);
}

#[test]
fn overwrite_payload_round_trips_from_a_record() {
    let vital = Vital {
        id: 3,
        identifier: vec!["p2".to_string()],
        weight: "80kg".to_string(),
        height: "180cm".to_string(),
        general_examination: "stable".to_string(),
    };
    let new: NewVital = vital.clone().into();
    assert_eq!(new.into_vital(3), vital);
}
