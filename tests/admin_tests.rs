use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{future_month, init_db, irr, setup_test_db, temp_out};

#[test]
fn init_is_idempotent() {
    let db_path = setup_test_db("init_twice");
    init_db(&db_path);
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}

#[test]
fn db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    let month = future_month();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &month])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "slot", "--add", "06:30", "--period", "AM"])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Scheduled days: 1"))
        .stdout(contains("Time slots:     1"));
}

#[test]
fn db_migrate_and_vacuum_run_cleanly() {
    let db_path = setup_test_db("db_maint");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Migrations up to date"))
        .stdout(contains("Database optimized"));
}

#[test]
fn operations_are_written_to_the_log() {
    let db_path = setup_test_db("oplog");
    init_db(&db_path);
    let month = future_month();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &month])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "slot", "--add", "06:30", "--period", "AM"])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("day_scheduled"))
        .stdout(contains("slot_added"));
}

#[test]
fn backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    init_db(&db_path);

    let out = temp_out("backup_plain", "sqlite");
    irr()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());
}

#[test]
fn compressed_backup_leaves_only_the_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip).ok();

    irr()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(zip.exists());
    assert!(!Path::new(&out).exists());
}
