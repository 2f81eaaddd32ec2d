use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn simulate_prints_a_json_report() {
    let path = std::env::temp_dir().join("battle_config_smoke.json");
    std::fs::write(
        &path,
        r#"{
            "seed": 7,
            "party": ["warrior"],
            "enemies": [
                { "name": "Goblin", "max_health": 30, "attack": 8, "defense": 2 }
            ]
        }"#,
    )
    .expect("write temp config");

    Command::cargo_bin("cli")
        .expect("binary builds")
        .args(["simulate", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"winner\""))
        .stdout(predicate::str::contains("\"rounds\""));
}

#[test]
fn simulate_with_a_missing_file_fails() {
    Command::cargo_bin("cli")
        .expect("binary builds")
        .args(["simulate", "--file", "/nonexistent/battle.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read battle config"));
}
