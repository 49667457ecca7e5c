use predicates::str::contains;

mod common;
use common::{future_month, init_db, irr, other_future_month, setup_test_db};

#[test]
fn toggle_schedules_and_unschedules_a_day() {
    let db_path = setup_test_db("toggle_pair");
    init_db(&db_path);
    let month = future_month();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Day 5 scheduled"));

    // toggling the same day twice restores the original state
    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Day 5 unscheduled"));

    irr()
        .args(["--db", &db_path, "show", "--month", &month])
        .assert()
        .success()
        .stdout(contains("0 days scheduled this month"));
}

#[test]
fn toggle_rejects_days_outside_the_month() {
    let db_path = setup_test_db("toggle_invalid_day");
    init_db(&db_path);
    let month = future_month(); // June has 30 days

    irr()
        .args(["--db", &db_path, "toggle", "31", "--month", &month])
        .assert()
        .failure()
        .stderr(contains("Invalid day of month: 31"));

    irr()
        .args(["--db", &db_path, "toggle", "0", "--month", &month])
        .assert()
        .failure()
        .stderr(contains("Invalid day of month: 0"));
}

#[test]
fn past_months_are_locked_out() {
    let db_path = setup_test_db("past_month");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "show", "--month", "2020-01"])
        .assert()
        .failure()
        .stderr(contains("past"));

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", "2020-01"])
        .assert()
        .failure()
        .stderr(contains("past"));
}

#[test]
fn show_counts_scheduled_days() {
    let db_path = setup_test_db("show_counts");
    init_db(&db_path);
    let month = future_month();

    for day in ["5", "6", "7"] {
        irr()
            .args(["--db", &db_path, "toggle", day, "--month", &month])
            .assert()
            .success();
    }

    irr()
        .args(["--db", &db_path, "show", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Scheduled days: 3"))
        .stdout(contains("3 days scheduled this month"));
}

#[test]
fn selections_are_scoped_per_month() {
    let db_path = setup_test_db("month_scope");
    init_db(&db_path);
    let june = future_month();
    let july = other_future_month();

    irr()
        .args(["--db", &db_path, "toggle", "5", "--month", &june])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "toggle", "10", "--month", &july])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "toggle", "11", "--month", &july])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "show", "--month", &june])
        .assert()
        .success()
        .stdout(contains("Scheduled days: 1"));

    irr()
        .args(["--db", &db_path, "show", "--month", &july])
        .assert()
        .success()
        .stdout(contains("Scheduled days: 2"));
}

#[test]
fn fill_and_clear_cover_the_whole_month() {
    let db_path = setup_test_db("fill_clear");
    init_db(&db_path);
    let month = future_month(); // June: 30 days, all in the future

    irr()
        .args(["--db", &db_path, "fill", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Scheduled 30 days"));

    // a second fill has nothing left to add
    irr()
        .args(["--db", &db_path, "fill", "--month", &month])
        .assert()
        .success()
        .stdout(contains("No selectable days left"));

    irr()
        .args(["--db", &db_path, "clear", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Unscheduled 30 days"));

    irr()
        .args(["--db", &db_path, "clear", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Nothing scheduled"));
}

#[test]
fn invalid_month_argument_is_rejected() {
    let db_path = setup_test_db("bad_month_arg");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "show", "--month", "june"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
