//! Parse behavior at the edges: unknown keys, missing sections, nulls, and
//! malformed input.

use sam_entity::{parse, parse_str, Entity, ParseErrorKind, PointsOfContact};

#[test]
fn unknown_keys_are_ignored_at_every_level() {
    let body = r#"{
        "totalRecords": 1,
        "links": { "selfLink": "https://api.sam.gov/..." },
        "entityData": [{
            "integrityInformation": { "proceedingsData": [] },
            "entityRegistration": { "ueiSAM": "A1", "brandNewFlag": "Y" },
            "coreData": {
                "physicalAddress": { "city": "Reno", "geoCode": { "lat": 39.5 } },
                "generalInformation": { "entityTypeCode": "F", "extra": [1, 2, 3] }
            },
            "assertions": { "sizeMetrics": { "averageNumberOfEmployees": 10 } },
            "repsAndCerts": {
                "certifications": {
                    "fARResponses": [{
                        "provisionId": "FAR 52.209-2",
                        "listOfAnswers": [{ "answerText": "Yes", "urlList": [{ "url": "x" }] }]
                    }]
                }
            }
        }]
    }"#;
    let r = parse_str(body).unwrap();
    let e = &r.entity_data[0];
    assert_eq!(e.uei(), "A1");
    assert_eq!(e.core_data.physical_address.city, "Reno");
    assert_eq!(e.core_data.general_information.entity_type_code, "F");
    assert_eq!(
        e.reps_and_certs.certifications.far_responses[0].list_of_answers[0].answer_text,
        "Yes"
    );
}

#[test]
fn missing_sections_default() {
    let r = parse_str(
        r#"{"totalRecords": 1, "entityData": [{"entityRegistration": {"ueiSAM": "A1"}}]}"#,
    )
    .unwrap();
    let e = &r.entity_data[0];
    assert_eq!(e.points_of_contact, PointsOfContact::default());
    assert_eq!(e.core_data, Default::default());
    assert_eq!(e.assertions, Default::default());
    assert_eq!(e.reps_and_certs, Default::default());
}

#[test]
fn null_sections_default() {
    let r = parse_str(
        r#"{"totalRecords": 1, "entityData": [{
            "entityRegistration": null,
            "coreData": null,
            "assertions": null,
            "repsAndCerts": null,
            "pointsOfContact": null
        }]}"#,
    )
    .unwrap();
    assert_eq!(r.entity_data[0], Entity::default());
}

#[test]
fn missing_entity_data_is_empty() {
    let r = parse_str(r#"{"totalRecords": 0}"#).unwrap();
    assert!(r.entity_data.is_empty());
    assert!(r.is_complete());
}

#[test]
fn truncated_input_is_eof() {
    let full = br#"{"totalRecords": 1, "entityData": [{"entityRegistration": {"ueiSAM": "A1"}}]}"#;
    for cut in [1, 10, 30, full.len() - 1] {
        let err = parse(&full[..cut]).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Eof, "cut at {cut}: {err}");
    }
}

#[test]
fn empty_input_is_eof() {
    assert_eq!(parse(b"").unwrap_err().kind(), ParseErrorKind::Eof);
    assert_eq!(parse(b"   \n").unwrap_err().kind(), ParseErrorKind::Eof);
}

#[test]
fn malformed_syntax_is_syntax() {
    for body in [r#"{"totalRecords": 1,}"#, r#"{totalRecords: 1}"#, "{'a': 1}"] {
        let err = parse_str(body).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax, "{body}: {err}");
    }
}

#[test]
fn wrong_top_level_type_is_data() {
    for body in ["[]", "\"entity\"", "42", "true", "null"] {
        let err = parse_str(body).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Data, "{body}: {err}");
    }
}

#[test]
fn type_mismatch_at_declared_field_is_data() {
    let cases = [
        r#"{"totalRecords": "one"}"#,
        r#"{"entityData": {"ueiSAM": "A1"}}"#,
        r#"{"entityData": [{"entityRegistration": {"ueiSAM": {"id": 1}}}]}"#,
        r#"{"entityData": [{"entityRegistration": {"cageCode": 12345}}]}"#,
        r#"{"entityData": [{"coreData": {"businessTypes": {"businessTypeList": "2X"}}}]}"#,
        r#"{"entityData": [{"pointsOfContact": {"governmentBusinessPOC": {"city": ["Reno"]}}}]}"#,
        concat!(
            r#"{"entityData": [{"repsAndCerts": {"certifications": "#,
            r#"{"dFARResponses": [{"listOfAnswers": [{"company": "x"}]}]}}}]}"#,
        ),
    ];
    for body in cases {
        let err = parse_str(body).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Data, "{body}: {err}");
    }
}

#[test]
fn positional_array_for_nested_record_is_data() {
    let cases = [
        r#"{"totalRecords": 1, "entityData": [{"entityRegistration": ["Yes", "C6M7C2FLKER5"]}]}"#,
        r#"{"totalRecords": 1, "entityData": [[]]}"#,
        r#"{"entityData": [{"coreData": {"physicalAddress": ["1 Main"]}}]}"#,
        r#"{"entityData": [{"coreData": {"businessTypes": {"businessTypeList": [["2X"]]}}}]}"#,
        r#"{"entityData": [{"pointsOfContact": {"pastPerformancePOC": []}}]}"#,
        r#"{"entityData": [{"repsAndCerts": {"certifications": {"fARResponses": [[]]}}}]}"#,
        r#"{"entityData": [{"repsAndCerts": {"qualifications": []}}]}"#,
    ];
    for body in cases {
        let err = parse_str(body).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Data, "{body}: {err}");
    }
}

#[test]
fn null_list_elements_default() {
    let r = parse_str(
        r#"{"totalRecords": 2, "entityData": [null, {"entityRegistration": {"ueiSAM": "A1"}}]}"#,
    )
    .unwrap();
    assert_eq!(r.entity_data.len(), 2);
    assert_eq!(r.entity_data[0], Entity::default());
    assert_eq!(r.entity_data[1].uei(), "A1");
}

#[test]
fn duplicate_key_is_data() {
    let body = concat!(
        "{\"entityData\": [{\"entityRegistration\": {\n",
        "  \"ueiSAM\": \"A\",\n",
        "  \"ueiSAM\": \"B\"\n",
        "}}]}",
    );
    let err = parse_str(body).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Data);
    assert_eq!(err.line(), 3);
    assert!(err.to_string().contains("duplicate field `ueiSAM`"), "{err}");
}

#[test]
fn error_reports_position() {
    let body = concat!(
        "{\n",
        "  \"totalRecords\": 1,\n",
        "  \"entityData\": [\n",
        "    {\"entityRegistration\": {\"cageCode\": 7}}\n",
        "  ]\n",
        "}",
    );
    let err = parse_str(body).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Data);
    assert_eq!(err.line(), 4);
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn semantic_nonsense_is_accepted() {
    let r = parse_str(
        r#"{"totalRecords": 1, "entityData": [{
            "entityRegistration": { "registrationDate": "yesterday", "ueiSAM": "" },
            "coreData": { "physicalAddress": { "countryCode": "NOT-A-COUNTRY" } }
        }]}"#,
    )
    .unwrap();
    let e = &r.entity_data[0];
    assert_eq!(e.entity_registration.registration_date, "yesterday");
    assert_eq!(e.core_data.physical_address.country_code, "NOT-A-COUNTRY");
}
