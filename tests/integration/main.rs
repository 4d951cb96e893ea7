//! Integration tests for the domain-ruleset CLI
//!
//! These tests drive the compiled binary against files in a temp directory.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "example.com\n*.foo.com\n# comment\n\nbad..domain\n";

/// Helper function to create a domain-ruleset command
fn domain_ruleset() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("domain-ruleset"))
}

/// Temp directory holding `domain.txt` with `content`
fn workspace(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("domain.txt"), content).unwrap();
    temp
}

#[test]
fn test_version() {
    domain_ruleset()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("domain-ruleset {}", domain_ruleset::VERSION)));
}

#[test]
fn test_help() {
    domain_ruleset()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exact"));
}

#[test]
fn test_default_mode() {
    let temp = workspace(SAMPLE);

    domain_ruleset()
        .args(["-i", "domain.txt", "-o", "rules.yaml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 2 domain(s)"))
        .stderr(predicate::str::contains("bad..domain"));

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "payload:\n  - '+.example.com'\n  - '+.foo.com'\n"
    );
}

#[test]
fn test_exact_mode() {
    let temp = workspace(SAMPLE);

    domain_ruleset()
        .args(["--input", "domain.txt", "--output", "rules.yaml", "--exact"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "payload:\n  - 'example.com'\n  - 'foo.com'\n"
    );
}

#[test]
fn test_exact_mode_preserve_wildcard() {
    let temp = workspace(SAMPLE);

    domain_ruleset()
        .args(["--exact", "--wildcard", "preserve"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "payload:\n  - '+.foo.com'\n  - 'example.com'\n"
    );
}

#[test]
fn test_invalid_wildcard_mode_rejected() {
    let temp = workspace(SAMPLE);

    domain_ruleset()
        .args(["--wildcard", "keep"])
        .current_dir(temp.path())
        .assert()
        .failure();

    assert!(!temp.path().join("rules.yaml").exists());
}

#[test]
fn test_defaults_to_domain_txt_and_rules_yaml() {
    let temp = workspace("example.com\n");

    domain_ruleset().current_dir(temp.path()).assert().success();

    assert!(temp.path().join("rules.yaml").exists());
}

#[test]
fn test_skipped_line_warnings_are_capped() {
    let mut input = String::from("ok.com\n");
    for i in 0..7 {
        input.push_str(&format!("invalid{i}\n"));
    }
    let temp = workspace(&input);

    let mut assert = domain_ruleset()
        .env_remove("RUST_LOG")
        .current_dir(temp.path())
        .assert()
        .success();
    for (line, i) in (2..=6).zip(0..) {
        assert = assert.stderr(predicate::str::contains(format!("line #{line}: invalid{i}")));
    }
    assert
        .stderr(predicate::str::contains("Skipped 7 invalid line(s)"))
        .stderr(predicate::str::contains("only the first 5 shown"))
        .stderr(predicate::str::contains("invalid5").not())
        .stderr(predicate::str::contains("invalid6").not());
}

#[test]
fn test_missing_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("other.txt"), "").unwrap();

    domain_ruleset()
        .args(["-i", "missing.txt", "-o", "rules.yaml"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.txt"))
        .stderr(predicate::str::contains("other.txt"));

    assert!(!temp.path().join("rules.yaml").exists());
}

#[test]
fn test_comment_only_input_fails_without_touching_output() {
    let temp = workspace("# just a comment\n");
    fs::write(temp.path().join("rules.yaml"), "previous\n").unwrap();

    domain_ruleset()
        .args(["-i", "domain.txt", "-o", "rules.yaml"])
        .current_dir(temp.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no valid domains"));

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "previous\n"
    );
}

#[test]
fn test_unwritable_output() {
    let temp = workspace("example.com\n");

    domain_ruleset()
        .args(["-o", "no/such/dir/rules.yaml"])
        .current_dir(temp.path())
        .assert()
        .code(6);
}

#[test]
fn test_non_utf8_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("domain.txt"), [0xff, 0xfe, 0x00, 0x61]).unwrap();

    domain_ruleset()
        .current_dir(temp.path())
        .assert()
        .code(4);
}

#[test]
fn test_config_file_and_cli_override() {
    let temp = workspace(SAMPLE);
    fs::write(
        temp.path().join(".domain-ruleset.toml"),
        "output = \"from-config.yaml\"\nexact = true\n",
    )
    .unwrap();

    domain_ruleset().current_dir(temp.path()).assert().success();
    assert_eq!(
        fs::read_to_string(temp.path().join("from-config.yaml")).unwrap(),
        "payload:\n  - 'example.com'\n  - 'foo.com'\n"
    );

    domain_ruleset()
        .args(["-o", "from-cli.yaml"])
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(temp.path().join("from-cli.yaml").exists());
}

#[test]
fn test_no_exact_overrides_config() {
    let temp = workspace(SAMPLE);
    fs::write(temp.path().join(".domain-ruleset.toml"), "exact = true\n").unwrap();

    domain_ruleset()
        .arg("--no-exact")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "payload:\n  - '+.example.com'\n  - '+.foo.com'\n"
    );
}

#[test]
fn test_last_of_exact_and_no_exact_wins() {
    let temp = workspace(SAMPLE);

    domain_ruleset()
        .args(["--no-exact", "--exact"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("rules.yaml")).unwrap(),
        "payload:\n  - 'example.com'\n  - 'foo.com'\n"
    );
}

#[test]
fn test_malformed_config() {
    let temp = workspace(SAMPLE);
    fs::write(temp.path().join("custom.toml"), "exact = \"yes\"\n").unwrap();

    domain_ruleset()
        .args(["--config", "custom.toml"])
        .current_dir(temp.path())
        .assert()
        .code(7);
}

#[test]
fn test_json_output() {
    let temp = workspace(SAMPLE);

    let output = domain_ruleset()
        .arg("--json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["written"], 2);
    assert_eq!(json["first_rule"], "+.example.com");
    assert_eq!(json["skipped"][0]["line"], 5);
}

#[test]
fn test_json_error() {
    let temp = workspace("# nothing\n");

    let output = domain_ruleset()
        .arg("--json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"]["code"], "NO_VALID_DOMAINS");
}
