//! Integration tests for the `check` and `show` commands.
//!
//! Covers:
//! - Successful validation of a complete config
//! - Failure modes: missing file, malformed TOML, rule violations
//! - `show` output in text and JSON form
//! - Config discovery: default name, --config flag, env override

mod common;

use common::{TestContext, VALID_CONFIG};
use predicates::prelude::*;

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_valid_config_at_default_path() {
    let ctx = TestContext::new();
    ctx.write_config("imgcatalog.toml", VALID_CONFIG);

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 data sources"))
        .stdout(predicate::str::contains("3 resolution tiers"));
}

#[test]
fn check_accepts_explicit_config_path() {
    let ctx = TestContext::new();
    let path = ctx.write_config("serving.toml", VALID_CONFIG);

    ctx.cli().args(["check", "--config"]).arg(&path).assert().success();
}

#[test]
fn check_honors_env_override() {
    let ctx = TestContext::new();
    let path = ctx.write_config("elsewhere.toml", VALID_CONFIG);

    ctx.cli().arg("check").env("IMGCATALOG_CONFIG", &path).assert().success();
}

#[test]
fn check_fails_when_config_file_is_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn check_fails_on_malformed_toml() {
    let ctx = TestContext::new();
    ctx.write_config("imgcatalog.toml", "image_root = [");

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed config file"));
}

#[test]
fn check_names_duplicate_data_source() {
    let ctx = TestContext::new();
    let config = VALID_CONFIG.replace("usdroughtmonitor-weekly-ndmc", "oisst-daily-cdr");
    ctx.write_config("imgcatalog.toml", &config);

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate data source id 'oisst-daily-cdr'"));
}

#[test]
fn check_names_resolution_length_mismatch() {
    let ctx = TestContext::new();
    let config = VALID_CONFIG.replace(r#", "High Definition: 1920px""#, "");
    ctx.write_config("imgcatalog.toml", &config);

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 entries"))
        .stderr(predicate::str::contains("2"));
}

#[test]
fn check_rejects_schemeless_url_prefix() {
    let ctx = TestContext::new();
    let config = VALID_CONFIG.replace("http://example.org/Images/", "example.org/Images/");
    ctx.write_config("imgcatalog.toml", &config);

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid URL"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_text_lists_sources_and_resolutions() {
    let ctx = TestContext::new();
    ctx.write_config("imgcatalog.toml", VALID_CONFIG);

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("image_root: /var/www/Images"))
        .stdout(predicate::str::contains("oisst-daily-cdr"))
        .stdout(predicate::str::contains("620 (Small: 620px)"));
}

#[test]
fn show_json_round_trips_declared_values() {
    let ctx = TestContext::new();
    ctx.write_config("imgcatalog.toml", VALID_CONFIG);

    let output = ctx.cli().args(["show", "--format", "json"]).output().expect("run show");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show --format json emits valid JSON");
    assert_eq!(value["image_root"], "/var/www/Images");
    assert_eq!(value["url_prefix"], "http://example.org/Images/");
    assert_eq!(value["data_source_ids"][0], "oisst-daily-cdr");
    assert_eq!(value["resolutions"][2]["directory"], "hd");
    assert_eq!(value["resolutions"][2]["title"], "High Definition: 1920px");
}

#[test]
fn show_fails_with_descriptive_message_on_invalid_config() {
    let ctx = TestContext::new();
    let config = VALID_CONFIG.replace("/var/www/Images", "www/Images");
    ctx.write_config("imgcatalog.toml", &config);

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute path"));
}
