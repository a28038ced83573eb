use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", temp_dir.path())
        .env_remove("EXPENSE_LEDGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn add(temp_dir: &TempDir, amount: &str, category: &str, date: &str, description: &str) {
    expense(temp_dir)
        .args(["add", amount, "-c", category, "-d", date, "-m", description])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));
}

fn seed(temp_dir: &TempDir) {
    add(temp_dir, "12.50", "Food", "2024-01-05", "Lunch at cafe");
    add(temp_dir, "800", "Rent", "2024-02-01", "February rent");
    add(temp_dir, "7.25", "food", "2024-01-20", "Groceries");
}

#[test]
fn test_missing_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();

    expense(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    assert!(!temp_dir.path().join("expenses.dat").exists());
}

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    assert!(temp_dir.path().join("expenses.dat").exists());

    expense(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch at cafe"))
        .stdout(predicate::str::contains("February rent"))
        .stdout(predicate::str::contains("$819.75"));
}

#[test]
fn test_ids_are_sequential() {
    let temp_dir = TempDir::new().unwrap();

    add(&temp_dir, "1", "A", "2024-01-01", "first");
    expense(&temp_dir)
        .args(["add", "2", "-c", "B", "-d", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));
}

#[test]
fn test_category_ignores_case() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["category", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch at cafe"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("February rent").not())
        .stdout(predicate::str::contains("$19.75"));
}

#[test]
fn test_range_is_inclusive() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["range", "2024-01-05", "2024-01-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch at cafe"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("February rent").not());

    expense(&temp_dir)
        .args(["range", "2024-12-31", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses found in the specified date range.",
        ));
}

#[test]
fn test_range_rejects_bad_bound() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["range", "2024-1-1", "2024-01-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date format"));
}

#[test]
fn test_search_is_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["search", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch at cafe"));

    expense(&temp_dir)
        .args(["search", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses found matching your search.",
        ));
}

#[test]
fn test_edit_keeps_invalid_fields() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["edit", "1", "--date", "bad", "--amount", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept current date"))
        .stdout(predicate::str::contains("Expense modified successfully! (amount)"));

    expense(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("$15.00"));
}

#[test]
fn test_delete_needs_force() {
    let temp_dir = TempDir::new().unwrap();
    add(&temp_dir, "3", "Coffee", "2024-03-01", "Espresso");

    expense(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    expense(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Espresso"));

    expense(&temp_dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    expense(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 42"));
}

#[test]
fn test_stats() {
    let temp_dir = TempDir::new().unwrap();
    add(&temp_dir, "30", "Food", "2024-01-01", "Dinner");
    add(&temp_dir, "40", "Transport", "2024-01-02", "Train");

    expense(&temp_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses:  $70.00"))
        .stdout(predicate::str::contains("Average Expense: $35.00"))
        .stdout(predicate::str::contains("42.9%"))
        .stdout(predicate::str::contains("57.1%"))
        .stdout(predicate::str::contains("Highest Expense: $40.00 (Transport - Train)"))
        .stdout(predicate::str::contains("Lowest Expense:  $30.00 (Food - Dinner)"));
}

#[test]
fn test_invalid_input_fails_and_saves_nothing() {
    let temp_dir = TempDir::new().unwrap();

    expense(&temp_dir)
        .args(["add", "5", "-c", "Food", "-d", "2024/01/01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    expense(&temp_dir)
        .args(["add", "-c", "Food", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expense(&temp_dir)
        .args(["add", "0", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!temp_dir.path().join("expenses.dat").exists());
}

#[test]
fn test_data_file_override() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("other.dat");

    expense(&temp_dir)
        .arg("--data-file")
        .arg(&custom)
        .args(["add", "9.99", "-c", "Books"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp_dir.path().join("expenses.dat").exists());
}

#[test]
fn test_truncated_file_warns() {
    let temp_dir = TempDir::new().unwrap();
    // Declares two records but holds none
    std::fs::write(temp_dir.path().join("expenses.dat"), 2i32.to_le_bytes()).unwrap();

    expense(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("recovered 0 of 2 expenses"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_export_json() {
    let temp_dir = TempDir::new().unwrap();
    seed(&temp_dir);

    expense(&temp_dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("February rent"));

    expense(&temp_dir)
        .args(["export", "--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn test_menu_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    expense(&temp_dir)
        .arg("menu")
        .write_stdin("1\n2024-05-01\n4.50\nCoffee\nFlat white\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully! (ID: 1)"))
        .stdout(predicate::str::contains("Goodbye!"));

    expense(&temp_dir)
        .args(["search", "Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flat white"));
}

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    expense(&temp_dir)
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.dat"))
        .stdout(predicate::str::contains("Capacity:        1000"));

    assert!(temp_dir.path().join("config.json").exists());
}
