use oval2json_core::error::{ConvertError, Unresolved};
use oval2json_core::source::read_document;
use oval2json_core::{convert, convert_source};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Path to the fixtures directory relative to the crate root.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture_text(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
}

/// Runs the full pipeline and returns the JSON contract value.
fn convert_fixture(name: &str) -> Value {
    let conversion = convert(&fixture_text(name)).expect("conversion should succeed");
    serde_json::to_value(&conversion.output).unwrap()
}

#[test]
fn roundtrip_scenario_produces_exact_criteria() {
    let value = convert_fixture("roundtrip.xml");

    assert_eq!(
        value,
        json!({"advisory": [{
            "title": "openssl and zlib",
            "fixes_cve": [],
            "severity": "",
            "affected_cpe": [],
            "criteria": [{"and": [
                {"and": [["version", "openssl", "less than", "2.0"]]},
                {"not": {"and": [["evr", "zlib", "equals", "1.0"]]}}
            ]}]
        }]})
    );
}

#[test]
fn rhel_sample_metadata() {
    let value = convert_fixture("rhel9_sample.xml");
    let advisories = value["advisory"].as_array().unwrap();

    // The inventory definition has no metadata and is dropped.
    assert_eq!(advisories.len(), 2);

    assert_eq!(advisories[0]["title"], "RHSA-2024:0105: nss security update (Moderate)");
    assert_eq!(advisories[0]["severity"], "Moderate");
    assert_eq!(advisories[0]["fixes_cve"], json!(["CVE-2023-5388"]));
    assert_eq!(
        advisories[0]["affected_cpe"],
        json!(["cpe:/a:redhat:enterprise_linux:9", "cpe:/o:redhat:enterprise_linux:9"])
    );

    assert_eq!(advisories[1]["severity"], "Important");
    assert_eq!(advisories[1]["fixes_cve"], json!(["CVE-2023-1192", "CVE-2023-2163"]));
    assert_eq!(advisories[1]["affected_cpe"], json!([]));
}

#[test]
fn rhel_sample_nested_criteria() {
    let value = convert_fixture("rhel9_sample.xml");

    assert_eq!(
        value["advisory"][0]["criteria"],
        json!([{"or": [
            {"and": [
                ["name", "redhat-release", "pattern match", "^redhat-release"],
                ["version", "redhat-release", "pattern match", "^9[^\\d]"]
            ]},
            {"and": [
                {"and": [
                    ["arch", "nss", "pattern match", "aarch64|ppc64le|s390x|x86_64"],
                    ["evr", "nss", "less than", "0:3.90.0-4.el9_3"]
                ]},
                {"and": [["signature__keyid", "nss", "equals", "199e2f91fd431d51"]]}
            ]}
        ]}])
    );
}

#[test]
fn rhel_sample_drops_dangling_leaf_and_negates_file_check() {
    let value = convert_fixture("rhel9_sample.xml");

    assert_eq!(
        value["advisory"][1]["criteria"],
        json!([{"and": [
            {"and": [["evr", "kernel", "less than", "0:5.14.0-362.18.1.el9_3"]]},
            {"not": {"and": [["name", "kernel", "pattern match", "^kernel"]]}}
        ]}])
    );
}

#[test]
fn diagnostics_account_for_every_drop() {
    let conversion = convert(&fixture_text("rhel9_sample.xml")).unwrap();
    let diagnostics = &conversion.diagnostics;

    assert_eq!(diagnostics.objects_indexed, 4);
    assert_eq!(diagnostics.states_indexed, 5);
    assert_eq!(diagnostics.tests_indexed, 5);
    assert_eq!(diagnostics.definitions_seen, 3);
    assert_eq!(
        diagnostics.definitions_seen - conversion.output.advisory.len(),
        1
    );
    assert_eq!(
        diagnostics.dropped,
        vec![
            Unresolved::Test {
                test_ref: "oval:com.redhat.rhsa:tst:99999999999".into()
            },
            Unresolved::MissingMetadata {
                definition_id: "oval:com.redhat.rhsa:def:20240300".into()
            },
        ]
    );
}

#[test]
fn conversion_is_deterministic() {
    let text = fixture_text("rhel9_sample.xml");

    let a = serde_json::to_string(&convert(&text).unwrap().output).unwrap();
    let b = serde_json::to_string(&convert(&text).unwrap().output).unwrap();

    assert_eq!(a, b);
}

#[test]
fn concurrent_conversions_do_not_share_indexes() {
    let rhel = fixture_text("rhel9_sample.xml");
    let roundtrip = fixture_text("roundtrip.xml");

    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| convert(&rhel).unwrap());
        let b = s.spawn(|| convert(&roundtrip).unwrap());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(a.output.advisory.len(), 2);
    assert_eq!(b.output.advisory.len(), 1);
    assert_eq!(b.diagnostics.tests_indexed, 2);
}

#[test]
fn malformed_document_fails_whole_conversion() {
    let err = convert("<oval_definitions><definitions></oval_definitions>").unwrap_err();
    assert!(matches!(err, ConvertError::Malformed(_)));
}

#[test]
fn empty_definitions_produce_empty_list() {
    let conversion = convert(
        r#"<oval_definitions xmlns="http://oval.mitre.org/XMLSchema/oval-definitions-5"/>"#,
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&conversion.output).unwrap(),
        json!({"advisory": []})
    );
}

#[test]
fn convert_source_attaches_fingerprint() {
    let source = read_document(&fixtures_dir().join("roundtrip.xml")).unwrap();
    let conversion = convert_source(&source).unwrap();

    let info = conversion.document.expect("document info");
    assert_eq!(info.sha256, source.sha256);
    assert_eq!(info.size_bytes, source.size_bytes);
    assert!(info.path.unwrap().ends_with("roundtrip.xml"));
}
