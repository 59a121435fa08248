use assert_cmd::Command;
use predicates::prelude::*;

fn mathproc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mathproc"));
    cmd.env_remove("RUST_LOG").env_remove("MATHPROC_FORMAT");
    cmd
}

// ── Demonstration ───────────────────────────────────────────────────────

#[test]
fn demo_prints_all_three_results() {
    let dir = tempfile::tempdir().unwrap();

    mathproc()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Math Processor Demo ==="))
        .stdout(predicate::str::contains("Sum of [1, 2, 3, 4, 5]: 15"))
        .stdout(predicate::str::contains(
            "Processed [-2, -1, 0, 1, 2, 3]: [2, 4, 6]",
        ))
        .stdout(predicate::str::contains(
            "Caught expected error: Input must be a list, got string",
        ));
}

#[test]
fn demo_uses_config_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[demo]\nnumbers = [10, 20]\n").unwrap();

    mathproc()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of [10, 20]: 30"));
}

#[test]
fn demo_json_is_an_array_of_reports() {
    let dir = tempfile::tempdir().unwrap();

    let output = mathproc()
        .current_dir(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(3));
    assert_eq!(parsed[2]["outcome"]["status"], "rejected");
}

// ── Single operations ───────────────────────────────────────────────────

#[test]
fn sum_prints_result() {
    mathproc()
        .args(["--sum", "[1, 2, 3, 4, 5]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of [1, 2, 3, 4, 5]: 15"));
}

#[test]
fn process_prints_result() {
    mathproc()
        .args(["--process", "[-2, -1, 0, 1, 2, 3]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 4, 6]"));
}

#[test]
fn sum_reads_stdin() {
    mathproc()
        .args(["--sum", "-"])
        .write_stdin("[1.5, 2]")
        .assert()
        .success()
        .stdout(predicate::str::contains(": 3.5"));
}

#[test]
fn sum_rejects_string_with_exit_code_2() {
    mathproc()
        .args(["--sum", "not a list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input must be a list"));
}

#[test]
fn sum_rejects_non_numeric_element() {
    mathproc()
        .args(["--sum", r#"[1, "a", 3]"#])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at index 1"));
}

#[test]
fn infinite_sum_is_explicit_in_json() {
    mathproc()
        .args(["--sum", "[1e308, 1e308]", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"inf\""));
}

#[test]
fn process_json_output() {
    mathproc()
        .args(["--process", "[3, \"a\", -1]", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"operation\": \"process\""));
}

// ── Argument handling ───────────────────────────────────────────────────

#[test]
fn verbose_and_quiet_conflict() {
    mathproc()
        .args(["--verbose", "--quiet"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot use both"));
}

#[test]
fn sum_and_process_conflict() {
    mathproc()
        .args(["--sum", "[1]", "--process", "[1]"])
        .assert()
        .code(1);
}

#[test]
fn unknown_format_exits_with_code_1() {
    mathproc()
        .args(["--sum", "[1]", "--format", "xml"])
        .assert()
        .code(1);

    mathproc()
        .args(["--sum", "[1]"])
        .env("MATHPROC_FORMAT", "xml")
        .assert()
        .code(1);
}

#[test]
fn help_and_version_succeed() {
    mathproc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sum"));

    mathproc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_config_writes_file_once() {
    let dir = tempfile::tempdir().unwrap();

    mathproc()
        .current_dir(dir.path())
        .arg("--init-config")
        .assert()
        .success();
    let written = std::fs::read_to_string(dir.path().join(".mathproc.toml")).unwrap();
    assert!(written.contains("[demo]"));

    mathproc()
        .current_dir(dir.path())
        .arg("--init-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
