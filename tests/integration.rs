// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

#[test]
fn scaffolds_current_directory_without_arguments() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("ds-skeleton").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert()
        .success()
        .stdout(predicates::str::contains(
            "Creating project structure in the current directory...",
        ))
        .stdout(predicates::str::contains(
            "Project structure created successfully.",
        ))
        .stdout(predicates::str::contains(
            "2. Initialize a git repository with 'git init'.",
        ));

    assert!(temp.path().join("data/01_raw/.gitkeep").is_file());
    assert!(temp.path().join("src/feature_engineering.py").is_file());
}

#[test]
fn scaffolds_into_destination_argument() {
    let temp = tempfile::tempdir().unwrap();
    let destination = temp.path().join("fraud");
    let mut cmd = assert_cmd::Command::cargo_bin("ds-skeleton").unwrap();

    cmd.arg(&destination);

    cmd.assert().success();

    assert!(destination.join("reports/figures/.gitkeep").is_file());
    assert_eq!(
        fs::read_to_string(destination.join("reports/Interim_1_Report.md")).unwrap(),
        "# Interim Report 1\n"
    );
}

#[test]
fn rerun_succeeds_and_overwrites_edits() {
    let temp = tempfile::tempdir().unwrap();

    assert_cmd::Command::cargo_bin("ds-skeleton")
        .unwrap()
        .current_dir(temp.path())
        .assert()
        .success();

    fs::write(temp.path().join("src/modelling.py"), "def train(): ...\n").unwrap();

    assert_cmd::Command::cargo_bin("ds-skeleton")
        .unwrap()
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("src/modelling.py")).unwrap(),
        "# Functions for training and evaluating models\n"
    );
}

#[test]
fn dry_run_prints_tree_only() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("ds-skeleton").unwrap();

    cmd.current_dir(temp.path()).arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Preview"))
        .stdout(predicates::str::contains("01_ecommerce_eda_and_preprocessing.ipynb"))
        .stdout(predicates::str::contains("created successfully").not());

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn preview_and_dry_run_conflict() {
    let mut cmd = assert_cmd::Command::cargo_bin("ds-skeleton").unwrap();

    cmd.arg("--preview").arg("--dry-run");

    cmd.assert().failure();
}

#[test]
fn filesystem_error_exits_non_zero() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("requirements.txt")).unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("ds-skeleton").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("requirements.txt"));
}
