use assert_cmd::Command;
use predicates::prelude::*;

fn pagemenu(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pagemenu").unwrap();
    cmd.arg("--config").arg(config_dir).env_remove("RUST_LOG");
    cmd
}

fn write_items(dir: &std::path::Path, count: usize) -> std::path::PathBuf {
    let path = dir.join("items.txt");
    let lines: Vec<String> = (1..=count).map(|i| format!("Item {}", i)).collect();
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn test_show_first_page_with_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path(), 25);

    pagemenu(temp_dir.path())
        .arg("show")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Viewing List](#00fb9a)"))
        .stdout(predicate::str::contains("Item 1\nItem 2"))
        .stdout(predicate::str::contains("Item 11").not())
        .stdout(predicate::str::contains("run_command=/example 2)"));
}

#[test]
fn test_show_reads_stdin_and_overrides() {
    let temp_dir = tempfile::tempdir().unwrap();

    pagemenu(temp_dir.path())
        .args(["show", "-p", "2", "--per-page", "2", "--command", "homes", "--topic", "Homes"])
        .write_stdin("a\nb\nc\nd\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Viewing Homes]"))
        .stdout(predicate::str::contains("(3-4 of"))
        .stdout(predicate::str::contains("c\nd"))
        .stdout(predicate::str::contains("run_command=/homes 1)"))
        .stdout(predicate::str::contains("run_command=/homes 3)"));
}

#[test]
fn test_show_clamps_out_of_range_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path(), 5);

    pagemenu(temp_dir.path())
        .args(["show", "--per-page", "2", "-p", "40"])
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 5"))
        .stdout(predicate::str::contains("Item 4").not());
}

#[test]
fn test_show_strict_fails_out_of_range() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path(), 5);

    pagemenu(temp_dir.path())
        .args(["show", "--strict", "--per-page", "2", "-p", "4"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(predicate::str::contains("total number of pages (3)"));
}

#[test]
fn test_show_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    pagemenu(temp_dir.path())
        .arg("show")
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn test_show_strict_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    pagemenu(temp_dir.path())
        .args(["show", "--strict", "-p", "3"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn test_config_init_then_show_uses_it() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("cfg");

    pagemenu(&config_dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let config_path = config_dir.join("config.json");
    let raw = std::fs::read_to_string(&config_path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json["header_template"] = serde_json::Value::String("%topic% %current_page%/%total_pages%".into());
    json["footer_template"] = serde_json::Value::String(String::new());
    json["space_after_header"] = serde_json::Value::Bool(false);
    json["items_per_page"] = serde_json::Value::from(3);
    std::fs::write(&config_path, serde_json::to_string(&json).unwrap()).unwrap();

    let items = write_items(temp_dir.path(), 7);
    pagemenu(&config_dir)
        .args(["show", "-p", "3"])
        .arg(&items)
        .assert()
        .success()
        .stdout("List 3/3\nItem 7\n");
}

#[test]
fn test_config_prints_effective_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    pagemenu(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"items_per_page\": 10"))
        .stdout(predicate::str::contains("\"accent_color\": \"#00fb9a\""));
}

#[test]
fn test_config_rejects_zero_items_per_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "items_per_page": 0 }"#,
    )
    .unwrap();

    pagemenu(temp_dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("items_per_page must be at least 1"));
}
