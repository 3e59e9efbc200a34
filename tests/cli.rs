use assert_cmd::Command;
use predicates::prelude::*;

fn quiz_cmd() -> Command {
    Command::cargo_bin("solana-quiz").unwrap()
}

#[test]
fn rejects_non_numeric_count() {
    quiz_cmd()
        .arg("abc")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage: solana-quiz [num_questions]"))
        .stdout(predicate::str::contains("Question").not());
}

#[test]
fn rejects_negative_count() {
    quiz_cmd()
        .arg("-3")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn huge_count_is_capped_at_bank_size() {
    quiz_cmd()
        .arg("99999999999999999999999")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("You will be asked 30 random questions."))
        .stdout(predicate::str::contains("Question 1/30:"));
}

#[test]
fn count_with_surrounding_spaces_is_accepted() {
    quiz_cmd()
        .arg(" 5 ")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("You will be asked 5 random questions."));
}

#[test]
fn zero_questions_reports_empty_score() {
    quiz_cmd()
        .arg("0")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("You will be asked 0 random questions."))
        .stdout(predicate::str::contains("You scored: 0/0 (0.0%)"))
        .stdout(predicate::str::contains("Keep studying!"));
}

#[test]
fn closed_stdin_ends_quiz_early() {
    quiz_cmd()
        .arg("5")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3/5:"))
        .stdout(predicate::str::contains("Quiz interrupted."))
        .stdout(predicate::str::contains("/2 ("));
}

#[test]
fn reprompts_on_bad_answer() {
    quiz_cmd()
        .arg("1")
        .write_stdin("maybe\n9\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a number between 1 and 2"))
        .stdout(predicate::str::contains("Explanation:"))
        .stdout(predicate::str::contains("/1 ("))
        .stdout(predicate::str::contains("Quiz interrupted.").not());
}

#[test]
fn defaults_to_ten_questions() {
    quiz_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("You will be asked 10 random questions."))
        .stdout(predicate::str::contains("Question 1/10:"));
}
