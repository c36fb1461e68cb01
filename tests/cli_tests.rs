use std::path::PathBuf;
use std::process::{Command, Output};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_factory")
}

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn factory(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("FACTORY_CONFIG", data_path("no-such-config.toml"))
        .env("FACTORY_SETS_PATH", data_path("battle_factory_pokemon.json"))
        .env("FACTORY_BASE_STATS_PATH", data_path("base_stats.json"))
        .env_remove("RUST_LOG")
        .output()
        .expect("factory should run")
}

#[test]
fn search_command_emits_json() {
    let output = factory(&["search", "--move", "METEOR MASH", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("search should emit json");
    let sets = payload.as_array().expect("search should emit a list");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0]["name"], "Metagross");
    assert_eq!(sets[0]["setNumber"], 1);
}

#[test]
fn search_command_prints_table() {
    let output = factory(&["search", "--name", "snorlax", "--round", "3"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Chesto Berry"));
    assert!(!stdout.contains("Curse"));
}

#[test]
fn stats_command_emits_json() {
    let output = factory(&["stats", "0", "--name", "metagross", "--round", "8", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("stats should emit json");
    assert_eq!(payload["hp"], 301);
    assert_eq!(payload["attack"], 336);
    assert_eq!(payload["spAttack"], 203);
}

#[test]
fn stats_command_reports_out_of_bounds() {
    let output = factory(&["stats", "4", "--name", "starmie"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of bounds"));
}

#[test]
fn too_many_moves_is_rejected() {
    let output = factory(&["search", "-m", "a", "-m", "b", "-m", "c", "-m", "d", "-m", "e"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at most 4 moves"));
}

#[test]
fn explicit_missing_config_fails() {
    let output = factory(&["--config", "missing/factory.toml", "search"]);

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read config"));
}
