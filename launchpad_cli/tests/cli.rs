//! End-to-end tests for the `launchpad` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn launchpad(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("launchpad").expect("binary built");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

const ONE_PROJECT: &str = r#"{
    "projects": [{
        "name": "Solo Sale",
        "description": "Only project in the catalog",
        "image": "https://img.example/solo.png",
        "totalRaise": "42 USDT",
        "tokenPrice": "0.42 USDT",
        "startTime": "2025-01-01 00:00 UTC",
        "status": "live"
    }],
    "features": []
}"#;

#[test]
fn renders_default_page_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    launchpad(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("DeFi Protocol"))
        .stdout(predicate::str::contains("Gamified Engagement"));
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().expect("temp dir");
    launchpad(&dir)
        .args(["--output", "dist/index.html", "--title", "Spring Launch"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(dir.path().join("dist/index.html")).expect("read output");
    assert!(html.contains("<title>Spring Launch</title>"));
    assert_eq!(html.matches("class=\"project-card\"").count(), 3);
}

#[test]
fn renders_custom_catalog() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("catalog.json"), ONE_PROJECT).expect("write catalog");

    launchpad(&dir)
        .args(["--catalog", "catalog.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo Sale"))
        .stdout(predicate::str::contains("0.42 USDT"))
        .stdout(predicate::str::contains("MetaVerse Token").not());
}

#[test]
fn rejects_unknown_status() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("catalog.json"),
        ONE_PROJECT.replace("\"live\"", "\"paused\""),
    )
    .expect("write catalog");

    launchpad(&dir)
        .args(["--catalog", "catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project status `paused`"));
}

#[test]
fn rejects_unknown_tab() {
    let dir = TempDir::new().expect("temp dir");
    launchpad(&dir)
        .args(["--tab", "trending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project tab"));
}

#[test]
fn config_file_wires_links_and_tab() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("launchpad.toml"),
        r#"
tab = "ended"

[links]
view_details = "/projects/{slug}"
"#,
    )
    .expect("write config");

    launchpad(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ended Projects"))
        .stdout(predicate::str::contains("href=\"/projects/gamefi-project\""))
        .stdout(predicate::str::contains("DeFi Protocol").not());
}

#[test]
fn config_catalog_resolves_next_to_config() {
    let dir = TempDir::new().expect("temp dir");
    let site = dir.path().join("site");
    std::fs::create_dir(&site).expect("create site dir");
    std::fs::write(site.join("catalog.json"), ONE_PROJECT).expect("write catalog");
    std::fs::write(site.join("launchpad.toml"), "catalog = \"catalog.json\"\n")
        .expect("write config");

    // Run from the parent directory; catalog.json only exists under site/
    launchpad(&dir)
        .args(["--config", "site/launchpad.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo Sale"))
        .stdout(predicate::str::contains("MetaVerse Token").not());
}

#[test]
fn flags_override_config() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("launchpad.toml"), "tab = \"ended\"\n").expect("write config");

    launchpad(&dir)
        .args(["--tab", "featured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Featured Projects"))
        .stdout(predicate::str::contains("DeFi Protocol"));
}

#[test]
fn dumps_catalog_json() {
    let dir = TempDir::new().expect("temp dir");
    launchpad(&dir)
        .arg("--dump-catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalRaise\": \"500,000 USDT\""))
        .stdout(predicate::str::contains("\"icon\": \"game_controller\""));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    launchpad(&dir)
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nope.toml"));
}
