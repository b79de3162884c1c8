use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn edueasy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("edueasy").unwrap();
    cmd.env("EDUEASY_DATA_DIR", dir.path())
        .env_remove("API_KEY")
        .env_remove("EDUEASY_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    edueasy(&dir).arg("init").assert().success();
    dir
}

#[test]
fn calc_straight_line_without_interest() {
    let dir = TempDir::new().unwrap();
    edueasy(&dir)
        .args(["calc", "1200", "--months", "12", "--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Payment: $100.00"))
        .stdout(predicate::str::contains("Total Interest:  $0.00"));
}

#[test]
fn calc_with_interest() {
    let dir = TempDir::new().unwrap();
    edueasy(&dir)
        .args(["calc", "2000", "--months", "120", "--rate", "5.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Payment: $21.71"));
}

#[test]
fn calc_rejects_zero_months() {
    let dir = TempDir::new().unwrap();
    edueasy(&dir)
        .args(["calc", "1000", "--months", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one month"));
}

#[test]
fn init_seeds_starter_loans() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fall Semester Tuition 2024"))
        .stdout(predicate::str::contains("Laptop & Equipment"))
        .stdout(predicate::str::contains("$4000.00"));
}

#[test]
fn init_twice_does_not_duplicate_seed() {
    let dir = initialized();
    edueasy(&dir).arg("init").assert().success();
    edueasy(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Loans:       2"));
}

#[test]
fn added_loan_shows_on_dashboard() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "add", "Spring Tuition", "3000", "--income", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added loan: Spring Tuition"));

    edueasy(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Loans:       3"))
        .stdout(predicate::str::contains("$7000.00"));
}

#[test]
fn negative_amount_is_rejected() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "add", "Refund", "--", "-50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn negative_amount_after_symbol_is_rejected() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "add", "Refund", "$-0.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    edueasy(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Loans:       2"));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "add", "Huge", "100000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn removing_unknown_loan_fails() {
    let dir = initialized();
    edueasy(&dir)
        .args(["loan", "remove", "zzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loan not found: zzzz"));
}

#[test]
fn currency_setting_converts_output() {
    let dir = initialized();
    edueasy(&dir)
        .args(["settings", "currency", "AZN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:      AZN"));

    edueasy(&dir)
        .args(["loan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₼4250.00"));
}

#[test]
fn application_requires_consents() {
    let dir = initialized();
    edueasy(&dir)
        .args([
            "loan",
            "apply",
            "--name",
            "Aysel",
            "--institution",
            "ADA University",
            "--specialty",
            "Economics",
            "--amount",
            "3000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("consents"));
}

#[test]
fn application_creates_education_loan() {
    let dir = initialized();
    edueasy(&dir)
        .args([
            "loan",
            "apply",
            "--name",
            "Aysel",
            "--institution",
            "ADA University",
            "--specialty",
            "Economics",
            "--amount",
            "3000",
            "--accept-agreement",
            "--accept-data-processing",
            "--accept-terms",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk assessment report"))
        .stdout(predicate::str::contains("Added loan: Standard STL - Economics"));
}

#[test]
fn advisor_without_key_explains() {
    let dir = initialized();
    edueasy(&dir)
        .arg("advise")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "API Key is missing. Please configure your environment variables.",
        ));
}

#[test]
fn chat_without_key_explains() {
    let dir = initialized();
    edueasy(&dir)
        .args(["chat", "--message", "Can I afford a bike?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(API Key missing)"));
}

#[test]
fn budget_goal_progress() {
    let dir = initialized();
    edueasy(&dir)
        .args(["budget", "goal", "add", "Laptop", "1000", "--current", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0088FE"));

    edueasy(&dir)
        .args(["budget", "goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25%"));
}

#[test]
fn history_records_seed() {
    let dir = initialized();
    edueasy(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan added: Fall Semester Tuition 2024 ($2500.00)"));
}

#[test]
fn history_renders_in_display_currency() {
    let dir = initialized();
    edueasy(&dir)
        .args(["settings", "currency", "AZN"])
        .assert()
        .success();

    edueasy(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan added: Fall Semester Tuition 2024 (₼4250.00)"))
        .stdout(predicate::str::contains("    currency: USD -> AZN"));
}

#[test]
fn first_quiz_unlocks_novice_badge_once() {
    let dir = initialized();
    edueasy(&dir)
        .args(["learn", "quiz", "1", "--answers", "2,1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 correct, +300 points"))
        .stdout(predicate::str::contains("New Badge Unlocked!"))
        .stdout(predicate::str::contains("You earned the Financial Novice badge!"));

    edueasy(&dir)
        .args(["learn", "quiz", "2", "--answers", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 correct, +100 points"))
        .stdout(predicate::str::contains("New Badge Unlocked!").not());

    edueasy(&dir)
        .args(["learn", "badges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Points: 500"))
        .stdout(predicate::str::contains("Scholar            locked: Complete 5 Quizzes"));
}

#[test]
fn unknown_quiz_fails() {
    let dir = initialized();
    edueasy(&dir)
        .args(["learn", "quiz", "9", "--answers", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quiz not found: 9"));
}
