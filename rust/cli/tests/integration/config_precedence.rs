// C-series: defaults < config file < environment < flags

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

fn cfg_json(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("cfg prints JSON")
}

#[test]
fn c1_defaults_without_file_or_env() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["cfg"], &[]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let v = cfg_json(&res.stdout);
    assert_eq!(v["rows"]["value"], 4);
    assert_eq!(v["columns"]["source"], "default");
    assert_eq!(v["turn_delay_ms"]["value"], 3500);
    assert_eq!(v["until"]["value"], "all");
    assert!(v["seed"]["value"].is_null());
}

#[test]
fn c2_env_overrides_file() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let cfg = tfm
        .create_file("bingo.toml", "seed = 7\nrows = 3\nuntil = \"first\"\n")
        .expect("config file");
    let cfg = cfg.to_string_lossy().into_owned();

    let res = cli.run_with_env(&["cfg"], &[("BINGO_CONFIG", cfg.as_str()), ("BINGO_SEED", "11")]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let v = cfg_json(&res.stdout);
    assert_eq!(v["seed"]["value"], 11);
    assert_eq!(v["seed"]["source"], "env");
    assert_eq!(v["rows"]["value"], 3);
    assert_eq!(v["rows"]["source"], "file");
    assert_eq!(v["until"]["value"], "first");
}

#[test]
fn c3_invalid_env_value_fails_with_config_error() {
    let cli = CliRunner::new().expect("cli runner");
    let res = cli.run_with_env(&["cfg"], &[("BINGO_ROWS", "0")]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Configuration error"),
        "stderr={}",
        res.stderr
    );
}

#[test]
fn c4_flag_seed_beats_env_seed() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 40).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let from_flag = cli.run_with_env(
        &["sim", words.as_str(), "--players", "2", "--seed", "4"],
        &[("BINGO_SEED", "8")],
    );
    let from_env = cli.run_with_env(&["sim", words.as_str(), "--players", "2"], &[("BINGO_SEED", "4")]);

    assert_eq!(from_flag.exit_code, 0, "stderr={}", from_flag.stderr);
    assert!(from_flag.stdout.contains("seed=4"));
    assert_eq!(from_flag.stdout, from_env.stdout);
}

#[test]
fn c5_smaller_cards_from_env() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 9).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let res = cli.run_with_env(
        &["sim", words.as_str(), "--players", "1", "--seed", "2"],
        &[("BINGO_ROWS", "3"), ("BINGO_COLUMNS", "3")],
    );

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout.matches("The winner is").count(), 1);
}
