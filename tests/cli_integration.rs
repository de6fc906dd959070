use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn build_library(root: &Path) {
    let set_dir = root.join("Section 1 - Marches/Set 01 - Medley");
    let parts_dir = set_dir.join("Parts");
    fs::create_dir_all(&parts_dir).unwrap();
    fs::write(set_dir.join("Set 01a - Scotland the Brave.pdf"), b"").unwrap();
    fs::write(set_dir.join("Set 01a - Scotland the Brave.wav"), b"").unwrap();
    fs::write(parts_dir.join("Set 01a - Scotland the Brave line 1_bass.pdf"), b"").unwrap();
    fs::write(parts_dir.join("Set 01a - Scotland the Brave line 1.wav"), b"").unwrap();
}

fn woodshed(library: &Path) -> Command {
    let mut cmd = Command::cargo_bin("woodshed").unwrap();
    cmd.arg("--library").arg(library);
    cmd
}

#[test]
fn scan_then_list_shows_discovered_items() {
    let tmp = TempDir::new().unwrap();
    build_library(tmp.path());

    woodshed(tmp.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 sets discovered"))
        .stdout(predicate::str::contains("1 new tunes"))
        .stdout(predicate::str::contains("1 new parts"));

    // The status document landed inside the library's data directory.
    assert!(tmp
        .path()
        .join("#Practice Resources/data/practice_status.json")
        .exists());

    woodshed(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Section 1 - Marches"))
        .stdout(predicate::str::contains("Set 01 - Medley"))
        .stdout(predicate::str::contains("Scotland the Brave"))
        .stdout(predicate::str::contains("line 1"));
}

#[test]
fn pass_records_a_repetition() {
    let tmp = TempDir::new().unwrap();
    build_library(tmp.path());

    woodshed(tmp.path()).arg("scan").assert().success();

    let part_id = "Section 1 - Marches|Set 01 - Medley|Parts|Set 01a - Scotland the Brave line 1";
    woodshed(tmp.path())
        .arg("pass")
        .arg(part_id)
        .assert()
        .success()
        .stdout(predicate::str::contains("streak 1"));

    woodshed(tmp.path())
        .arg("pass")
        .arg(part_id)
        .assert()
        .success()
        .stdout(predicate::str::contains("streak 2"));
}

#[test]
fn assets_prints_resolved_paths() {
    let tmp = TempDir::new().unwrap();
    build_library(tmp.path());
    woodshed(tmp.path()).arg("scan").assert().success();

    woodshed(tmp.path())
        .arg("assets")
        .arg("Section 1 - Marches|Set 01 - Medley|Set 01a - Scotland the Brave")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 01a - Scotland the Brave.pdf"))
        .stdout(predicate::str::contains("Set 01a - Scotland the Brave.wav"));
}

#[test]
fn unknown_library_fails_with_error() {
    Command::cargo_bin("woodshed")
        .unwrap()
        .arg("--library")
        .arg("/definitely/not/a/real/path")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Library root not found"));
}

#[test]
fn practicing_a_set_id_is_rejected() {
    let tmp = TempDir::new().unwrap();
    build_library(tmp.path());
    woodshed(tmp.path()).arg("scan").assert().success();

    woodshed(tmp.path())
        .arg("start")
        .arg("Section 1 - Marches|Set 01 - Medley")
        .assert()
        .failure()
        .stderr(predicate::str::contains("organizational"));
}
