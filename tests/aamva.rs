mod common;
use aamva_text::{
    aamva::{framing, CRITICAL_FIELDS},
    parse, parse_bytes, Field, LicenseScan, ScanSource,
};
use common::*;

const FLORIDA_FIELDS: [(&str, &str); 27] = [
    ("licenseCode", "D123456789012"),
    ("firstName", "JOHN"),
    ("secondName", "MIDDLE"),
    ("address", "123 MAIN ST"),
    ("city", "ORLANDO"),
    ("state", "FL"),
    ("postalCode", "32801"),
    ("height", "068 IN"),
    ("licenseExpirationDate", "08152026"),
    ("dateOfBirth", "08151990"),
    ("Sex", "1"),
    ("licenseIssueDate", "08152018"),
    ("licenseTypeOfVehicle", "D"),
    ("licenseRestrictions", "NONE"),
    ("licenseOtherVehicles", "NONE"),
    ("licenseId", "12345678901234567890"),
    ("licenseIssueCountry", "USA"),
    ("licenseId2", "12345678901234567890123456789012345678"),
    ("surnames", "SMITH"),
    ("licenseCompliance", "M"),
    ("licenseFormatVersion", "08152018"),
    ("licenseType", "1"),
    ("surnameAlias", "N"),
    ("firstNameAlias", "N"),
    ("secondNameAlias", "N"),
    ("licenseTypeOfDriver", ""),
    ("statalId", ""),
];

#[test]
fn florida_license() {
    let fields = parse(&load_payload("tests/aamva/florida.txt"));

    assert_eq!(fields.len(), FLORIDA_FIELDS.len());
    for (name, value) in FLORIDA_FIELDS {
        assert_eq!(fields.get_by_name(name), Some(value), "field `{name}`");
    }

    // Unmapped codes (DCU, DAY, DDK, ZFZ, ...) leave no trace.
    assert!(fields.iter().all(|(_, v)| !v.contains("BRO")));
    assert!(fields.missing_critical().is_empty());
}

#[test]
fn florida_license_bytes() {
    let bytes = load_payload_bytes("tests/aamva/florida.txt");
    let text = load_payload("tests/aamva/florida.txt");
    assert_eq!(parse_bytes(&bytes), parse(&text));
}

#[test]
fn continuation_lines() {
    let fields = parse(&load_payload("tests/aamva/continued.txt"));

    assert_eq!(fields.get(Field::LicenseCode), Some("D123456789012"));
    assert_eq!(fields.get(Field::Surnames), Some("VAN DER BERG"));
    assert_eq!(fields.get(Field::FirstName), Some("ANNE"));
    assert_eq!(fields.get(Field::Address), Some("1200 NORTH ocean drive"));

    // `BEACH` starts with three capitals and is read as the `BEA` code.
    assert_eq!(fields.get(Field::City), Some("MIAMI"));

    assert_eq!(fields.len(), 5);
    assert_eq!(fields.missing_critical(), [Field::DateOfBirth, Field::State]);
}

#[test]
fn parsing_clean_text_is_idempotent() {
    for path in ["tests/aamva/florida.txt", "tests/aamva/continued.txt"] {
        let raw = load_payload(path);
        let cleaned = framing::clean(&raw);
        assert_eq!(parse(&cleaned), parse(&raw), "{path}");
        assert_eq!(framing::clean(&cleaned), cleaned, "{path}");
    }
}

#[test]
fn parse_is_total() {
    let inputs = [
        "",
        "@",
        "\x1e\r\n",
        "plain prose, nothing coded here",
        "AB",
        "ABC",
        "ANS",
        "ANSDAQ",
        "\u{fffd}\u{2028}DAC",
        "DAC\n\n\n\nJOHN",
        "DAC\n\n\n\njohn",
        "ÀÉÎ\nÕÜ",
    ];

    for input in inputs {
        let _ = parse(input);
    }

    assert!(parse("plain prose, nothing coded here").is_empty());
    assert_eq!(parse("DAC\n\n\n\njohn").get(Field::FirstName), Some(" john"));
    // `JOH` is read as an unmapped code, so the name stays empty.
    assert_eq!(parse("DAC\n\n\n\nJOHN").get(Field::FirstName), Some(""));
    assert_eq!(parse("ANSDAQ").get(Field::LicenseCode), Some(""));
}

#[test]
fn designator_line_sample() {
    let fields = parse("ANSI 636014080002DL00410288ZF03190008DLDAQD12345678901234");
    assert_eq!(fields.get_by_name("licenseCode"), Some("D123456789012"));
}

#[test]
fn empty_payload_misses_every_critical_field() {
    assert_eq!(parse("").missing_critical(), CRITICAL_FIELDS);
}

#[test]
fn scan_record_serialization() {
    let raw = load_payload("tests/aamva/florida.txt");
    let scan = LicenseScan::from_payload(&raw, ScanSource::Camera);
    let json = serde_json::to_value(&scan).unwrap();

    for (name, value) in FLORIDA_FIELDS {
        assert_eq!(json[name], value, "field `{name}`");
    }
    assert_eq!(json["barcode"], raw.as_str());
    assert_eq!(json["barcodeType"], "camera");

    let back: LicenseScan = serde_json::from_value(json).unwrap();
    assert_eq!(back, scan);
}

#[test]
fn cleared_scan_record() {
    let json = serde_json::to_value(LicenseScan::default()).unwrap();
    assert_eq!(json["firstName"], "");
    assert_eq!(json["Sex"], "");
    assert!(json["barcodeType"].is_null());
}

#[test]
fn parsed_fields_serialize_as_map() {
    let fields = parse("DACJOHN\nDCSSMITH\nJR\nDBC1");
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "firstName": "JOHN",
            "Sex": "1",
            "surnames": "SMITH JR",
        })
    );
}
