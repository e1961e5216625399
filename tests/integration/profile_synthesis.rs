use super::support::full_submission;
use super::RegistryHarness;
use anyhow::Result;
use bizregistry::profiles::{synthesize_profile, Submission};
use bizregistry::registry::{read_json_document, write_json_document};
use bizregistry::validation::ProfileValidator;
use bizregistry::RegistryError;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::fs;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
}

#[test]
fn full_submission_produces_a_schema_conformant_profile() -> Result<()> {
    let harness = RegistryHarness::new();
    let submission_path = harness.root().join("submissions/northwind.json");
    fs::create_dir_all(submission_path.parent().unwrap())?;
    fs::write(&submission_path, serde_json::to_vec(&full_submission())?)?;

    let submission = Submission::load(&submission_path)?;
    let profile = synthesize_profile(&submission, date())?;
    let output = harness.root().join("data/community/food/northwind.json");
    write_json_document(&output, &profile)?;

    let written: Value = read_json_document(&output)?;
    assert_eq!(written["description"]["yearFounded"], 1996);
    assert_eq!(written["location"]["headquarters"], "Seattle, WA");
    assert_eq!(
        written["contact"],
        json!({ "email": "hello@northwind.example", "phone": "+1 206 555 0100" })
    );
    assert_eq!(written["metadata"]["submittedBy"], "Jordan");
    assert_eq!(
        written["businessIdentifier"]["aliases"],
        json!(["NW Traders", "Northwind Trading"])
    );

    let validator = ProfileValidator::load(&harness.config().schema_path)?;
    assert!(validator.validate_file(&output)?.is_valid());
    Ok(())
}

#[test]
fn minimal_submission_has_no_optional_sections() -> Result<()> {
    let submission = Submission::from_value(json!({
        "legalName": "Tiny LLC",
        "primaryDomain": "tiny.example"
    }))?;
    let value = serde_json::to_value(synthesize_profile(&submission, date())?)?;

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "businessIdentifier",
            "description",
            "metadata",
            "schemaVersion",
            "sources",
            "verification"
        ]
    );
    assert_eq!(value["sources"].as_array().unwrap().len(), 1);
    assert_eq!(value["sources"][0]["url"], "https://tiny.example");
    assert_eq!(value["sources"][0]["accessed"], "2024-08-20");
    Ok(())
}

#[test]
fn missing_submission_is_input_not_found() {
    let harness = RegistryHarness::new();
    let err = Submission::load(&harness.root().join("nope.json")).unwrap_err();
    assert!(matches!(err, RegistryError::InputNotFound { .. }));
}

#[test]
fn failed_synthesis_leaves_no_output() {
    let harness = RegistryHarness::new();
    let output = harness.root().join("out/profile.json");
    let submission = Submission::from_value(json!({
        "legalName": "Broken",
        "primaryDomain": "broken.example",
        "yearFounded": "soon"
    }))
    .unwrap();

    let result = synthesize_profile(&submission, date())
        .map(|profile| write_json_document(&output, &profile));
    assert!(matches!(result, Err(RegistryError::TypeCoercion { .. })));
    assert!(!output.exists());
}
