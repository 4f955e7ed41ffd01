//! End-to-end CLI checks over the compiled-in reference table.

use assert_cmd::Command;
use predicates::prelude::*;

fn hr() -> Command {
    Command::cargo_bin("hr").unwrap()
}

#[test]
fn apportion_2020_reports_certified_counts() {
    hr().args(["apportion", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_voting_seats\": 435"))
        .stdout(predicate::str::contains("\"CA\""));
}

#[test]
fn apportion_rejects_uncovered_year() {
    hr().args(["apportion", "--year", "1950"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1950"));
}

#[test]
fn min_change_add_is_feasible_for_new_york_2020() {
    hr().args(["min-change", "--st", "NY", "--year", "2020", "--target", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"feasible\": true"));
}

#[test]
fn residents_per_rep_emits_fifty_states() {
    hr().args(["residents-per-rep", "--year", "2010"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fair\""))
        .stdout(predicate::str::contains("\"WY\""));
}

#[test]
fn analyze_voting_requires_readable_exports() {
    hr().args([
        "analyze-voting",
        "--congress",
        "118",
        "--members",
        "/no/such/members.csv",
        "--votes",
        "/no/such/votes.csv",
        "--rollcalls",
        "/no/such/rollcalls.csv",
    ])
    .assert()
    .failure()
    .code(4);
}
