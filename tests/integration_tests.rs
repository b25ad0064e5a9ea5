use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{event_id, init_store, rdl, setup_test_db, stored_events};

#[test]
fn test_add_and_list_event() {
    let db_path = setup_test_db("add_and_list");
    init_store(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Write quarterly report",
            "--deadline",
            "+3d",
            "--priority",
            "high",
        ])
        .assert()
        .success()
        .stdout(contains("Write quarterly report"));

    rdl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Write quarterly report"))
        .stdout(contains("high"))
        // three days out: coarse days+hours countdown
        .stdout(contains("2d ").or(contains("3d ")));
}

#[test]
fn test_add_rejects_empty_title() {
    let db_path = setup_test_db("empty_title");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "   ", "--deadline", "+1h"])
        .assert()
        .failure()
        .stderr(contains("title must not be empty"));

    // collection untouched
    assert_eq!(stored_events(&db_path).as_array().unwrap().len(), 0);
}

#[test]
fn test_add_rejects_bad_deadline() {
    let db_path = setup_test_db("bad_deadline");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "Task", "--deadline", "soonish"])
        .assert()
        .failure()
        .stderr(contains("Invalid deadline"));
}

#[test]
fn test_add_rejects_unknown_partition() {
    let db_path = setup_test_db("unknown_partition");
    init_store(&db_path);

    rdl()
        .args([
            "--db", &db_path, "add", "Task", "--deadline", "+1h", "--partition", "999",
        ])
        .assert()
        .failure()
        .stderr(contains("No partition found with id 999"));

    assert_eq!(stored_events(&db_path).as_array().unwrap().len(), 0);
}

#[test]
fn test_add_rejects_nonpositive_urgent_hours() {
    let db_path = setup_test_db("bad_urgent_hours");
    init_store(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Task",
            "--deadline",
            "+1h",
            "--urgent-hours",
            "0",
        ])
        .assert()
        .failure()
        .stderr(contains("urgent hours must be a positive number"));
}

#[test]
fn test_done_toggle_and_history_view() {
    let db_path = setup_test_db("done_toggle");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "Ship release", "--deadline", "+2d"])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    // complete it
    rdl()
        .args(["--db", &db_path, "done", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("completed"));

    let ev = &stored_events(&db_path)[0];
    assert_eq!(ev["completed"], true);
    assert!(ev.get("completedAt").is_some(), "completedAt must be stamped");

    // completed events leave the default view and appear in history
    rdl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("no events"));

    rdl()
        .args(["--db", &db_path, "list", "--view", "history"])
        .assert()
        .success()
        .stdout(contains("Ship release"));

    // toggle back: open again, completedAt cleared (not restored)
    rdl()
        .args(["--db", &db_path, "done", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("reopened"));

    let ev = &stored_events(&db_path)[0];
    assert_eq!(ev["completed"], false);
    assert!(
        ev.get("completedAt").is_none(),
        "completedAt must be cleared on un-complete"
    );
}

#[test]
fn test_del_event() {
    let db_path = setup_test_db("del_event");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "Disposable", "--deadline", "+1d"])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    rdl()
        .args(["--db", &db_path, "del", &id.to_string(), "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    assert_eq!(stored_events(&db_path).as_array().unwrap().len(), 0);

    rdl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("no events"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let db_path = setup_test_db("del_confirm");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "Keep me", "--deadline", "+1d"])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    // answering 'n' must leave the event alone
    rdl()
        .args(["--db", &db_path, "del", &id.to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(stored_events(&db_path).as_array().unwrap().len(), 1);
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "del", "12345", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No event found with id 12345"));
}

#[test]
fn test_edit_merges_fields() {
    let db_path = setup_test_db("edit_merge");
    init_store(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Original title",
            "--deadline",
            "+1d",
            "--desc",
            "keep this description",
        ])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    rdl()
        .args([
            "--db",
            &db_path,
            "edit",
            &id.to_string(),
            "--title",
            "New title",
            "--priority",
            "high",
        ])
        .assert()
        .success()
        .stdout(contains("New title"));

    let ev = &stored_events(&db_path)[0];
    assert_eq!(ev["title"], "New title");
    assert_eq!(ev["priority"], "high");
    // untouched fields survive the merge
    assert_eq!(ev["description"], "keep this description");
    assert_eq!(ev["id"], id);
}

#[test]
fn test_edit_without_fields_fails() {
    let db_path = setup_test_db("edit_nothing");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "Task", "--deadline", "+1d"])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    rdl()
        .args(["--db", &db_path, "edit", &id.to_string()])
        .assert()
        .failure()
        .stderr(contains("nothing to change"));
}

#[test]
fn test_urgent_view_window_and_expiry() {
    let db_path = setup_test_db("urgent_window");
    init_store(&db_path);

    // inside the default 24h window
    rdl()
        .args(["--db", &db_path, "add", "Due soon", "--deadline", "+23h"])
        .assert()
        .success();

    // outside the window
    rdl()
        .args(["--db", &db_path, "add", "Due later", "--deadline", "+25h"])
        .assert()
        .success();

    // already expired: shown as expired, but expired is not urgent
    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Too late",
            "--deadline",
            "2020-01-01 00:00",
        ])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "list", "--view", "urgent"])
        .assert()
        .success()
        .stdout(contains("Due soon"))
        .stdout(contains("Due later").not())
        .stdout(contains("Too late").not());

    rdl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("expired"));
}

#[test]
fn test_urgent_view_respects_custom_window() {
    let db_path = setup_test_db("urgent_custom");
    init_store(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Wide window",
            "--deadline",
            "+40h",
            "--urgent-hours",
            "48",
        ])
        .assert()
        .success();

    rdl()
        .args(["--db", &db_path, "list", "--view", "urgent"])
        .assert()
        .success()
        .stdout(contains("Wide window"));
}

#[test]
fn test_list_sort_order_and_direction() {
    let db_path = setup_test_db("sort_order");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "EarlierDeadline", "--deadline", "+1h"])
        .assert()
        .success();

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "LaterDeadline",
            "--deadline",
            "+2h",
            "--priority",
            "high",
        ])
        .assert()
        .success();

    // asc: earlier deadline first
    let out = rdl()
        .args(["--db", &db_path, "list", "--sort", "deadline"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let a = stdout.find("EarlierDeadline").expect("first event listed");
    let b = stdout.find("LaterDeadline").expect("second event listed");
    assert!(a < b, "asc order: earlier deadline must come first");

    // desc: reversed
    let out = rdl()
        .args([
            "--db",
            &db_path,
            "list",
            "--sort",
            "deadline",
            "--direction",
            "desc",
        ])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let a = stdout.find("EarlierDeadline").expect("first event listed");
    let b = stdout.find("LaterDeadline").expect("second event listed");
    assert!(b < a, "desc order: later deadline must come first");

    // priority desc: high before low/medium
    let out = rdl()
        .args([
            "--db",
            &db_path,
            "list",
            "--sort",
            "priority",
            "--direction",
            "desc",
        ])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let earlier = stdout.find("EarlierDeadline").expect("medium priority listed");
    let later = stdout.find("LaterDeadline").expect("high priority listed");
    assert!(later < earlier, "high priority must come first");
}

#[test]
fn test_list_unknown_partition_fails() {
    let db_path = setup_test_db("list_unknown_partition");
    init_store(&db_path);

    rdl()
        .args(["--db", &db_path, "list", "--partition", "42"])
        .assert()
        .failure()
        .stderr(contains("No partition found with id 42"));
}

#[test]
fn test_list_mode_list_compact_output() {
    let db_path = setup_test_db("list_compact");
    init_store(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "Compact row",
            "--deadline",
            "+5d",
            "--desc",
            "a longer description that should appear with details",
        ])
        .assert()
        .success();

    let id = event_id(&db_path, 0);

    rdl()
        .args(["--db", &db_path, "list", "--mode", "list", "--details"])
        .assert()
        .success()
        .stdout(contains(format!("[{}] Compact row", id)))
        .stdout(contains("a longer description"));
}
