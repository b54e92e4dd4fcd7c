#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FEED: &str = "\
Team;Priority;Type;Feature;Epic Owner;Scope;Status;Planned Sprint;Due;Comments;Completion;S1;S2;S3;S4;S5;IP
Falcons;1;Story;Login;Ana;Core;Ready for QA;S2;;;100;20;60;;;100;
Falcons;2;Feature;Search;Bo;Core;Ready;S4;;;96;35;;;;95;
Otters;1;Story;Export;Ana;Edge;Blocked;UNC;;;40;50;;;;40;
Otters;3;Story;Import;Cy;Edge;;;;;0;;;;;;
;1;Story;Orphan;Di;;;;;;100;;;;;;
short;row
";

fn write_feed(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("sprint.csv");
    fs::write(&path, FEED).expect("feed should write");
    path
}

fn sprintboard() -> Command {
    Command::cargo_bin("sprintboard").expect("binary should compile")
}

fn json_stdout(args: &[&str], root: &Path) -> serde_json::Value {
    let output = sprintboard()
        .args(args)
        .arg("--root")
        .arg(root)
        .output()
        .expect("command should run");
    assert!(output.status.success(), "command should succeed");
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn analytics_reads_source_from_repo_config() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(repo.path().join("exports")).expect("exports dir should create");
    fs::write(repo.path().join("exports/sprint.csv"), FEED).expect("feed should write");
    fs::write(
        repo.path().join("sprintboard.toml"),
        r#"
[source]
path = "exports/sprint.csv"
"#,
    )
    .expect("config should write");

    let value = json_stdout(&["analytics"], repo.path());
    assert_eq!(value["summary"]["totalFeatures"], 5);
    assert_eq!(value["summary"]["totalTeams"], 2);
    assert_eq!(value["leaderboard"][0]["name"], "Falcons");
    assert_eq!(value["leaderboard"][0]["score"], 1418);
    assert_eq!(value["badges"]["sprintStars"]["entries"][0]["medal"], "🥇");
    assert_eq!(value["source"]["skippedRows"], 1);
}

#[test]
fn analytics_fails_when_source_is_missing() {
    let repo = TempDir::new().expect("temp dir should be created");

    sprintboard()
        .arg("analytics")
        .arg("--root")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("sprint data source not found"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());
    fs::write(
        repo.path().join("sprintboard.toml"),
        r#"
[scoring]
no_progress_penalty = 4
"#,
    )
    .expect("config should write");

    sprintboard()
        .arg("leaderboard")
        .arg("--source")
        .arg(&feed)
        .arg("--root")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no_progress_penalty"));
}

#[test]
fn scoring_overrides_change_leaderboard_scores() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());
    fs::create_dir_all(repo.path().join(".sprintboard")).expect("local dir should create");
    fs::write(
        repo.path().join(".sprintboard/local.toml"),
        r#"
[scoring]
velocity_improvement_bonus = 0
"#,
    )
    .expect("local config should write");

    let feed_arg = feed.to_string_lossy().to_string();
    let value = json_stdout(&["leaderboard", "--source", &feed_arg], repo.path());
    assert_eq!(value["leaderboard"][0]["score"], 1068);
    assert_eq!(value["summary"]["completedFeatures"], 2);
}

#[test]
fn team_reports_rank_and_features() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());
    let feed_arg = feed.to_string_lossy().to_string();

    let value = json_stdout(&["team", "Otters", "--source", &feed_arg], repo.path());
    assert_eq!(value["rank"], 2);
    assert_eq!(value["team"]["kpis"]["momentum"], -10);
    assert_eq!(value["features"].as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_team_exits_with_not_found() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());

    sprintboard()
        .arg("team")
        .arg("Nobody")
        .arg("--source")
        .arg(&feed)
        .arg("--root")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("team not found: Nobody"));
}

#[test]
fn features_filters_by_status_and_team() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());
    let feed_arg = feed.to_string_lossy().to_string();

    let value = json_stdout(
        &["features", "--status", "completed", "--source", &feed_arg],
        repo.path(),
    );
    assert_eq!(value["count"], 2);

    let value = json_stdout(
        &[
            "features",
            "--status",
            "in-progress",
            "--team",
            "Otters",
            "--source",
            &feed_arg,
        ],
        repo.path(),
    );
    assert_eq!(value["count"], 1);
    assert_eq!(value["features"][0]["featureName"], "Export");
}

#[test]
fn progress_and_personas_payloads() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());
    let feed_arg = feed.to_string_lossy().to_string();

    let progress = json_stdout(&["progress", "--source", &feed_arg], repo.path());
    assert_eq!(progress["sprintProgress"]["S1"]["count"], 3);
    assert_eq!(progress["sprintProgress"]["S1"]["average"], 35);
    assert_eq!(progress["sprintProgress"]["S5"]["date"], "9-Dec");

    let personas = json_stdout(&["personas", "--source", &feed_arg], repo.path());
    assert_eq!(personas["personas"]["Ana"]["totalFeatures"], 2);
    assert!(personas["personas"].get("Di").is_none());
}

#[test]
fn leaderboard_markdown_output() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());

    sprintboard()
        .arg("leaderboard")
        .arg("--source")
        .arg(&feed)
        .arg("--root")
        .arg(repo.path())
        .arg("--format")
        .arg("md")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## Leaderboard"))
        .stdout(predicate::str::contains("| 1 | Falcons | 1418 |"));
}

#[test]
fn repeated_runs_are_identical() {
    let repo = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(repo.path());

    let run = || {
        sprintboard()
            .arg("analytics")
            .arg("--source")
            .arg(&feed)
            .arg("--root")
            .arg(repo.path())
            .output()
            .expect("command should run")
            .stdout
    };
    assert_eq!(run(), run());
}
