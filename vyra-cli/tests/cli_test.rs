use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `vyra` command isolated in its own home directory
fn vyra(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vyra").unwrap();
    cmd.env("VYRA_HOME", home.path())
        .env_remove("VYRA_CONFIG")
        .env_remove("VYRA_DB_PATH")
        .env("NO_COLOR", "1");
    cmd
}

fn onboard(home: &TempDir, args: &[&str]) {
    vyra(home)
        .args(["onboard", "--first-name", "Alex"])
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("You're all set, Alex"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("vyra").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AI fitness coach"))
        .stdout(predicate::str::contains("onboard"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("vyra").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("vyra").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_vyra"));
}

#[test]
fn test_plan_requires_onboarding() {
    let home = TempDir::new().unwrap();

    vyra(&home)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("vyra onboard"));
}

#[test]
fn test_plan_after_onboarding() {
    let home = TempDir::new().unwrap();
    onboard(&home, &["--sport", "running:beginner", "--days", "3"]);

    vyra(&home)
        .args(["plan", "--date", "2024-05-15", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week of 2024-05-13 - 2024-05-19"))
        .stdout(predicate::str::contains("Tuesday"))
        .stdout(predicate::str::contains("Rest day"))
        .stdout(predicate::str::contains("Easy Jog").or(predicate::str::contains("Walk-Run Intervals")));
}

#[test]
fn test_today_on_rest_day() {
    let home = TempDir::new().unwrap();
    onboard(&home, &["--sport", "gym:moderate", "--days", "3"]);

    // Tuesday is a rest day on a three day schedule
    vyra(&home)
        .args(["today", "--date", "2024-05-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest day"));
}

#[test]
fn test_stats_counts_sunday_recovery() {
    let home = TempDir::new().unwrap();
    onboard(&home, &["--sport", "yoga", "--days", "4"]);

    vyra(&home)
        .args(["stats", "--date", "2024-05-15", "--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workouts:       5"));
}

#[test]
fn test_profile_edits_persist() {
    let home = TempDir::new().unwrap();
    onboard(&home, &["--sport", "running"]);

    vyra(&home)
        .args(["profile", "set", "last-name", "Rivera"])
        .assert()
        .success();
    vyra(&home)
        .args(["profile", "add-sport", "boxing", "advanced"])
        .assert()
        .success();

    vyra(&home)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Rivera"))
        .stdout(predicate::str::contains("Boxing"))
        .stdout(predicate::str::contains("Advanced"));
}

#[test]
fn test_key_lifecycle() {
    let home = TempDir::new().unwrap();

    vyra(&home)
        .args(["key", "set", "not-a-key"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("starts with sk-"));

    vyra(&home)
        .args(["key", "set", "sk-test-1234567890"])
        .assert()
        .success();

    vyra(&home)
        .args(["key", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configured (sk-…7890)"));

    vyra(&home).args(["key", "clear"]).assert().success();

    vyra(&home)
        .args(["key", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_reset_keeps_api_key() {
    let home = TempDir::new().unwrap();
    onboard(&home, &["--sport", "tennis"]);
    vyra(&home)
        .args(["key", "set", "sk-test-1234567890"])
        .assert()
        .success();

    vyra(&home)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your API key was kept"));

    vyra(&home)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("vyra onboard"));
}

#[test]
fn test_config_init_and_show() {
    let home = TempDir::new().unwrap();

    vyra(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));

    assert!(home.path().join("config.toml").exists());

    vyra(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o-mini"));
}
