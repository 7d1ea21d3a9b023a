//! End-to-end CLI tests against the built-in catalogs.

use assert_cmd::Command;
use predicates::prelude::*;

fn riftline() -> Command {
    let mut cmd = Command::cargo_bin("riftline").expect("binary builds");
    // Keep host configuration out of the tests.
    cmd.env("RIFTLINE_CONFIG", "/nonexistent/riftline.toml");
    cmd.env_remove("RIFTLINE_OUTPUT");
    cmd.env_remove("RIFTLINE_COLOR");
    cmd
}

#[test]
fn champions_list_plain_emits_one_name_per_line() {
    riftline()
        .args(["champions", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout("Ahri\nGaren\nJinx\nThresh\nLee Sin\nLux\n");
}

#[test]
fn role_filter_and_search_combine_with_and() {
    riftline()
        .args(["champions", "list", "--role", "mage", "--search", "lady", "-o", "plain"])
        .assert()
        .success()
        .stdout("Lux\n");
}

#[test]
fn search_with_no_match_yields_empty_output() {
    riftline()
        .args(["champions", "list", "--search", "zzz", "-o", "plain"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn get_unknown_champion_exits_with_not_found() {
    riftline()
        .args(["champions", "get", "teemo"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn bad_facet_value_is_a_usage_error() {
    riftline()
        .args(["champions", "list", "--role", "jungler"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected one of"));
}

#[test]
fn json_output_is_parseable_and_ordered() {
    let assert = riftline()
        .args(["modes", "list", "-o", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let names: Vec<&str> = parsed
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names[0], "Ranked Solo/Duo");
    assert_eq!(names.len(), 6);
}

#[test]
fn news_featured_flag_narrows_the_feed() {
    riftline()
        .args(["news", "list", "--featured", "-o", "plain"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn news_category_accepts_the_two_word_label() {
    riftline()
        .args(["news", "list", "--category", "patch notes", "-o", "plain"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn rankings_region_facet_is_exact() {
    riftline()
        .args(["rankings", "players", "--region", "EUW", "-o", "plain"])
        .assert()
        .success()
        .stdout("Caps\nJankos\n");

    // Facet comparison is case-sensitive: lowercase matches nothing.
    riftline()
        .args(["rankings", "players", "--region", "euw", "-o", "plain"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn esports_status_filter_keeps_schedule_order() {
    riftline()
        .args(["esports", "matches", "--status", "upcoming", "-o", "plain"])
        .assert()
        .success()
        .stdout("JDG vs BLG\nCloud9 vs Team Liquid\n");
}

#[test]
fn config_file_sets_the_default_output_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\noutput = \"plain\"\n").expect("write config");

    let mut cmd = Command::cargo_bin("riftline").expect("binary builds");
    cmd.env("RIFTLINE_CONFIG", &path);
    cmd.env_remove("RIFTLINE_OUTPUT");
    cmd.args(["rankings", "teams", "--league", "LPL"])
        .assert()
        .success()
        .stdout("JD Gaming\nBiliBili Gaming\n");
}

#[test]
fn config_path_honors_the_env_override() {
    riftline()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("riftline.toml"));
}
