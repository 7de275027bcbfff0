use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const TM_SUBMISSION: &str = r#"
sow_num: "1234"
sow_name: Implementation
start: 2025-01-06
end: 2025-06-30
pm_client: John Client
pm_sp: Project PM
mode: time_and_materials
resources:
  - role: Engineer
    location: Remote
    start_date: 2025-01-06
    end_date: 2025-01-10
    allocation_pct: 100
    hours_per_day: 8
    rate: 100
"#;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sowgen").unwrap();
    cmd.env("SOWGEN_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn workdays_counts_a_full_week() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["workdays", "2024-01-01", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Total working days (Mon-Fri) between selected dates: 5"));
}

#[test]
fn generate_produces_named_document() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("sub.yaml");
    fs::write(&submission, TM_SUBMISSION).unwrap();

    let template = dir.path().join("client.txt");
    fs::write(
        &template,
        "SOW {{ sow_num }} ({{ start_date }} to {{ end_date }})\n\
         {{#resources}}{{ Role }}: {{ Estimated $ }}\n{{/resources}}\
         Total: {{ currency_value_str }}\n",
    )
    .unwrap();

    let out_dir = dir.path().join("out");
    cmd(&dir)
        .arg("generate")
        .arg(&submission)
        .arg("--template")
        .arg(&template)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("SOW document generated"));

    let output =
        out_dir.join("1234 - Implementation - January 06, 2025 to June 30, 2025.txt");
    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("SOW 1234 (January 06, 2025 to June 30, 2025)"));
    assert!(rendered.contains("Engineer: 4000"));
    assert!(rendered.contains("Total: $4,000.00"));

    // The supplied template is stashed alongside the output
    assert!(out_dir.join("template.txt").exists());
}

#[test]
fn generate_without_template_aborts() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("sub.yaml");
    fs::write(&submission, TM_SUBMISSION).unwrap();

    cmd(&dir)
        .args(["generate", submission.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("No template supplied"));
}

#[test]
fn compute_previews_totals() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("sub.yaml");
    fs::write(&submission, TM_SUBMISSION).unwrap();

    cmd(&dir)
        .args(["compute", submission.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Total Contract Value: $4,000.00"));
}

#[test]
fn context_emits_json_mapping() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("sub.yaml");
    fs::write(&submission, TM_SUBMISSION).unwrap();

    cmd(&dir)
        .args(["context", submission.to_str().unwrap(), "--compact"])
        .assert()
        .success()
        .stdout(contains("\"sow_num\":\"1234\""))
        .stdout(contains("\"currency_value\":4000.0"));
}

#[test]
fn init_creates_directories() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(dir.path().join("generated_sows").exists());
    assert!(dir.path().join("templates").exists());
    assert!(dir.path().join("config.json").exists());
}
