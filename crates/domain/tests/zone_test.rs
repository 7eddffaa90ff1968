use ferrous_zone_domain::{Record, RecordType, Zone, TRANSFORM_METADATA_KEY};
use std::str::FromStr;

#[test]
fn test_record_type_round_trips_through_str() {
    for rtype in [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::ALIAS,
        RecordType::ImportTransform,
    ] {
        assert_eq!(RecordType::from_str(rtype.as_str()), Ok(rtype));
    }
}

#[test]
fn test_record_type_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("cname"), Ok(RecordType::CNAME));
    assert_eq!(
        RecordType::from_str("import_transform"),
        Ok(RecordType::ImportTransform)
    );
    assert!(RecordType::from_str("SPF").is_err());
}

#[test]
fn test_record_type_classification() {
    assert!(RecordType::CNAME.has_hostname_target());
    assert!(RecordType::MX.has_hostname_target());
    assert!(!RecordType::A.has_hostname_target());
    assert!(!RecordType::TXT.has_hostname_target());

    assert!(RecordType::TXT.allows_underscore_label());
    assert!(!RecordType::CNAME.allows_underscore_label());

    assert!(RecordType::CNAME.forbidden_at_apex());
    assert!(RecordType::NS.forbidden_at_apex());
    assert!(!RecordType::A.forbidden_at_apex());

    assert!(RecordType::ImportTransform.is_pseudo());
}

#[test]
fn test_record_with_target_copies_everything_else() {
    let record = Record::new("www", RecordType::A, "10.0.0.1")
        .with_ttl(600)
        .with_metadata(TRANSFORM_METADATA_KEY, "10.0.0.0~10.0.0.9~~192.0.2.1");

    let copy = record.with_target("192.0.2.1");

    assert_eq!(copy.target, "192.0.2.1");
    assert_eq!(copy.name, record.name);
    assert_eq!(copy.ttl, record.ttl);
    assert_eq!(copy.metadata, record.metadata);
    assert_eq!(record.target, "10.0.0.1");
}

#[test]
fn test_record_transform_metadata() {
    let plain = Record::new("www", RecordType::A, "10.0.0.1");
    assert!(plain.transform().is_none());

    let tagged = plain.with_metadata("transform", "rules");
    assert_eq!(tagged.transform(), Some("rules"));
}

#[test]
fn test_zone_deserializes_from_toml() {
    let toml_str = r#"
        name = "example.com"

        [[records]]
        name = "@"
        type = "A"
        target = "192.0.2.1"

        [[records]]
        name = "www"
        type = "CNAME"
        target = "@"
        ttl = 60

        [[records]]
        name = "imported"
        type = "IMPORT_TRANSFORM"
        target = "other.com"
        metadata = { transform_table = "10.0.0.0~10.0.0.9~~192.0.2.2" }
    "#;

    let zone: Zone = toml::from_str(toml_str).unwrap();

    assert_eq!(zone.name, "example.com");
    assert!(zone.migrate_to.is_none());
    assert_eq!(zone.records.len(), 3);
    assert_eq!(zone.records[0].record_type, RecordType::A);
    assert_eq!(zone.records[0].ttl, 0);
    assert_eq!(zone.records[1].ttl, 60);
    assert_eq!(zone.records[2].record_type, RecordType::ImportTransform);
    assert_eq!(
        zone.records[2].metadata.get("transform_table").map(String::as_str),
        Some("10.0.0.0~10.0.0.9~~192.0.2.2")
    );
}

#[test]
fn test_zone_rejects_unsupported_record_type() {
    let toml_str = r#"
        name = "example.com"

        [[records]]
        name = "@"
        type = "SPF"
        target = "v=spf1 -all"
    "#;

    assert!(toml::from_str::<Zone>(toml_str).is_err());
}
