#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tachanun(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tachanun").unwrap();
    cmd.current_dir(dir.path())
        .env("TACHANUN_CONFIG", dir.path().join("tachanun.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// tachanun check / today
// ---------------------------------------------------------------------------

#[test]
fn check_purim_meshulash() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .args(["check", "2025-03-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday 16 Adar 5785"))
        .stdout(predicate::str::contains("Tachanun: No / לא"))
        .stdout(predicate::str::contains("Purim Meshulash / פורים משולש"));
}

#[test]
fn check_ordinary_day_has_no_reason_line() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .args(["check", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tachanun: Yes / כן"))
        .stdout(predicate::str::contains("Reason:").not());
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let output = tachanun(&dir)
        .args(["--json", "check", "2023-12-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tachanun_en"], "No");
    assert_eq!(json["reason_en"], "Chanukah");
    assert_eq!(json["date_en"], "Friday 3 Tevet 5784");
    assert_eq!(json["date_he"], "יום ו' 3 טבת 5784");
}

#[test]
fn check_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .args(["check", "2025-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a YYYY-MM-DD date"));
}

#[test]
fn today_prints_an_answer() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tachanun:"));
}

// ---------------------------------------------------------------------------
// tachanun upcoming
// ---------------------------------------------------------------------------

#[test]
fn upcoming_lists_requested_days() {
    let dir = TempDir::new().unwrap();
    let output = tachanun(&dir)
        .args(["upcoming", "--from", "2024-12-24", "--days", "11"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // header + separator + 11 rows
    assert_eq!(stdout.lines().count(), 13);
    assert_eq!(stdout.matches("Chanukah").count(), 8);
    assert!(stdout.contains("2025-01-03"));
}

#[test]
fn upcoming_uses_configured_day_count() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tachanun.yaml"), "upcoming:\n  days: 3\n").unwrap();

    let output = tachanun(&dir)
        .args(["--json", "upcoming", "--from", "2025-03-14"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["date"], "2025-03-14");
    assert_eq!(days[0]["report"]["reason_en"], "Purim");
    assert_eq!(days[1]["report"]["reason_en"], "Shushan Purim");
    assert_eq!(days[2]["report"]["reason_en"], "Purim Meshulash");
}

#[test]
fn upcoming_rejects_absurd_day_counts() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .args(["upcoming", "--from", "2024-01-01", "--days", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too many"));
}

#[test]
fn upcoming_rejects_absurd_configured_day_count() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tachanun.yaml"),
        "upcoming:\n  days: 4294967295\n",
    )
    .unwrap();

    tachanun(&dir)
        .args(["upcoming", "--from", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too many"));
}

// ---------------------------------------------------------------------------
// tachanun config
// ---------------------------------------------------------------------------

#[test]
fn config_show_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server.port:   8080"));
}

#[test]
fn config_init_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    tachanun(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("tachanun.yaml").exists());

    tachanun(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tachanun.yaml"), "upcoming:\n  days: 0\n").unwrap();

    tachanun(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] upcoming.days"));
}
