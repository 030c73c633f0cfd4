//! End-to-end tests for the interactive shell binary
//!
//! Drives the `finflow` binary over piped stdin with an isolated data
//! directory per test.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finflow(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finflow").unwrap();
    cmd.env("FINFLOW_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn shows_banner_and_exits() {
    let data_dir = TempDir::new().unwrap();
    finflow(&data_dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("FinFlow - personal finance manager"))
        .stdout(predicate::str::contains("[Guest] Available commands:"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn register_login_record_and_stats() {
    let data_dir = TempDir::new().unwrap();
    finflow(&data_dir)
        .write_stdin(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "setbudget\nFood\n4000\n",
            "addexp\nFood\n800\n",
            "addcat\nSalary\n",
            "addinc\nSalary\n60000\n",
            "stats\n",
            "exit\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, alice!"))
        .stdout(predicate::str::contains("Total income: 60000"))
        .stdout(predicate::str::contains("Total expenses: 800"))
        .stdout(predicate::str::contains("Balance: 59200"));
}

#[test]
fn wallet_survives_restart() {
    let data_dir = TempDir::new().unwrap();

    finflow(&data_dir)
        .write_stdin(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "setbudget\nFood\n1000\n",
            "addexp\nFood\n250\n",
            "exit\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet data saved"));

    finflow(&data_dir)
        .write_stdin("login\nalice\nsecret\nstats cat\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet data loaded."))
        .stdout(predicate::str::contains("Food: 1000. Remaining budget: 750"));
}

#[test]
fn report_export_writes_csv_file() {
    let data_dir = TempDir::new().unwrap();

    finflow(&data_dir)
        .write_stdin(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "addexp\nFood\n800\n",
            "stats file\n\n",
            "exit\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Report (CSV) saved:"));

    let reports: Vec<_> = std::fs::read_dir(data_dir.path().join("reports"))
        .unwrap()
        .collect();
    assert_eq!(reports.len(), 1);
    let contents = std::fs::read_to_string(reports[0].as_ref().unwrap().path()).unwrap();
    assert!(contents.contains("Category,Income,Expense,Budget,Remaining"));
    assert!(contents.contains("Food,0,800,0,-800"));
}

#[test]
fn config_subcommand_prints_paths() {
    let data_dir = TempDir::new().unwrap();
    finflow(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("Reports:"));
}
