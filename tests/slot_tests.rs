use predicates::str::contains;

mod common;
use common::{init_db, irr, setup_test_db};

#[test]
fn add_and_list_slots() {
    let db_path = setup_test_db("slot_add_list");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--add", "06:30", "--period", "AM"])
        .assert()
        .success()
        .stdout(contains("Added watering time 06:30 AM"));

    irr()
        .args(["--db", &db_path, "slot", "--list"])
        .assert()
        .success()
        .stdout(contains("06:30 AM"))
        .stdout(contains("enabled"));
}

#[test]
fn slot_labels_are_canonicalized() {
    let db_path = setup_test_db("slot_canonical");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--add", "8:5", "--period", "pm"])
        .assert()
        .success()
        .stdout(contains("Added watering time 08:05 PM"));
}

#[test]
fn invalid_slot_times_are_rejected() {
    let db_path = setup_test_db("slot_invalid");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--add", "13:00", "--period", "AM"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    irr()
        .args(["--db", &db_path, "slot", "--add", "08:00", "--period", "XX"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn disable_enable_and_delete_slot() {
    let db_path = setup_test_db("slot_lifecycle");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--add", "06:30", "--period", "AM"])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "slot", "--disable", "1"])
        .assert()
        .success()
        .stdout(contains("Slot 1 disabled"));

    irr()
        .args(["--db", &db_path, "slot", "--list"])
        .assert()
        .success()
        .stdout(contains("disabled"));

    irr()
        .args(["--db", &db_path, "slot", "--enable", "1"])
        .assert()
        .success()
        .stdout(contains("Slot 1 enabled"));

    irr()
        .args(["--db", &db_path, "slot", "--del", "1"])
        .assert()
        .success()
        .stdout(contains("Slot 1 deleted"));

    irr()
        .args(["--db", &db_path, "slot", "--list"])
        .assert()
        .success()
        .stdout(contains("No watering times configured"));
}

#[test]
fn unknown_slot_ids_error() {
    let db_path = setup_test_db("slot_unknown");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--del", "99"])
        .assert()
        .failure()
        .stderr(contains("Unknown time slot id: 99"));
}

#[test]
fn next_watering_is_earliest_enabled_slot() {
    let db_path = setup_test_db("slot_next");
    init_db(&db_path);

    irr()
        .args(["--db", &db_path, "slot", "--add", "06:00", "--period", "PM"])
        .assert()
        .success();
    irr()
        .args(["--db", &db_path, "slot", "--add", "07:15", "--period", "AM"])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Next watering:  07:15 AM"));

    // disabling the morning slot moves next watering to the evening
    irr()
        .args(["--db", &db_path, "slot", "--disable", "2"])
        .assert()
        .success();

    irr()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Next watering:  06:00 PM"));
}
