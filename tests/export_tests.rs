use predicates::str::contains;
use std::fs;

mod common;
use common::{future_month, future_year, init_db, irr, setup_test_db, temp_out};

#[test]
fn export_csv_writes_scheduled_days() {
    let db_path = setup_test_db("export_csv");
    init_db(&db_path);
    let month = future_month();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &month])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "toggle", "6", "--month", &month])
        .assert()
        .success();

    let out = temp_out("export_csv", "csv");
    irr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,year,month,day"));
    assert!(content.contains(&format!("{}-06-05", future_year())));
    assert!(content.contains(&format!("{}-06-06", future_year())));
}

#[test]
fn export_json_includes_slots_and_schedule_name() {
    let db_path = setup_test_db("export_json");
    init_db(&db_path);
    let month = future_month();

    irr()
        .args(["--db", &db_path, "toggle", "12", "--month", &month])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "slot", "--add", "06:30", "--period", "AM"])
        .assert()
        .success();

    let out = temp_out("export_json", "json");
    irr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("My Irrigation Schedule"));
    assert!(content.contains("06:30 AM"));
    assert!(content.contains(&format!("{}-06-12", future_year())));
}

#[test]
fn export_month_filter_narrows_the_rows() {
    let db_path = setup_test_db("export_filter");
    init_db(&db_path);
    let june = future_month();
    let year = future_year();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &june])
        .assert()
        .success();
    irr()
        .args([
            "--db",
            &db_path,
            "toggle",
            "9",
            "--month",
            &format!("{year}-07"),
        ])
        .assert()
        .success();

    let out = temp_out("export_filter", "csv");
    irr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", &june,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains(&format!("{year}-06-05")));
    assert!(!content.contains(&format!("{year}-07-09")));
}

#[test]
fn existing_files_need_force() {
    let db_path = setup_test_db("export_force");
    init_db(&db_path);

    let out = temp_out("export_force", "csv");
    irr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    irr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    irr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
}
