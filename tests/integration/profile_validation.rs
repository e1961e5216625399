use super::support::conformant_profile;
use super::RegistryHarness;
use anyhow::Result;
use bizregistry::registry::Tier;
use bizregistry::validation::{ProfileValidator, ValidationOutcome, EXIT_INVALID};
use bizregistry::RegistryError;

#[test]
fn conformant_profile_is_valid() -> Result<()> {
    let harness = RegistryHarness::new();
    let path = harness.write_profile(
        Tier::Verified,
        "tech/acme.json",
        &conformant_profile("Acme", "acme.com"),
    );
    let validator = ProfileValidator::load(&harness.config().schema_path)?;

    let outcome = validator.validate_file(&path)?;
    assert_eq!(outcome, ValidationOutcome::Valid);
    assert!(outcome.report("acme.json").starts_with("[VALID]"));
    Ok(())
}

#[test]
fn missing_required_field_points_at_its_location() -> Result<()> {
    let harness = RegistryHarness::new();
    let mut profile = conformant_profile("Acme", "acme.com");
    profile["businessIdentifier"]
        .as_object_mut()
        .unwrap()
        .remove("legalName");
    let path = harness.write_profile(Tier::Verified, "tech/acme.json", &profile);
    let validator = ProfileValidator::load(&harness.config().schema_path)?;

    let outcome = validator.validate_file(&path)?;
    assert_eq!(outcome.exit_code(), EXIT_INVALID);
    let ValidationOutcome::Invalid(violation) = outcome else {
        panic!("expected an invalid outcome");
    };
    assert_eq!(violation.path, ["businessIdentifier", "legalName"]);
    assert!(violation.message.contains("legalName"));
    Ok(())
}

#[test]
fn enum_violation_is_reported_with_path() -> Result<()> {
    let harness = RegistryHarness::new();
    let mut profile = conformant_profile("Acme", "acme.com");
    profile["verification"]["tier"] = "platinum".into();
    let path = harness.write_profile(Tier::Verified, "tech/acme.json", &profile);
    let validator = ProfileValidator::load(&harness.config().schema_path)?;

    let ValidationOutcome::Invalid(violation) = validator.validate_file(&path)? else {
        panic!("expected an invalid outcome");
    };
    assert_eq!(violation.display_path(), "verification -> tier");
    Ok(())
}

#[test]
fn nonexistent_profile_is_an_input_error() -> Result<()> {
    let harness = RegistryHarness::new();
    let validator = ProfileValidator::load(&harness.config().schema_path)?;

    let err = validator
        .validate_file(&harness.root().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::InputNotFound { .. }));
    Ok(())
}

#[test]
fn unparseable_profile_is_an_input_error() -> Result<()> {
    let harness = RegistryHarness::new();
    let path = harness.write_raw(Tier::Community, "misc/bad.json", "not json");
    let validator = ProfileValidator::load(&harness.config().schema_path)?;

    let err = validator.validate_file(&path).unwrap_err();
    assert!(matches!(err, RegistryError::Malformed { .. }));
    Ok(())
}

#[test]
fn missing_schema_fails_to_load() {
    let harness = RegistryHarness::new();
    let err = ProfileValidator::load(&harness.root().join("schema/none.json"))
        .err()
        .unwrap();
    assert!(matches!(err, RegistryError::InputNotFound { .. }));
}
