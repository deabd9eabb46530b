// A-series: argument handling and exit codes

use crate::helpers::asserter;
use crate::helpers::assertions::BingoAssertions;
use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_all_commands() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    asserter().assert_help_contains_commands(&res.stdout);
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0, "--version should exit 0");
    assert!(res.stdout.contains("bingo"), "stdout={}", res.stdout);
}

#[test]
fn a3_unknown_subcommand_shows_commands_on_stderr() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should list commands\n---stderr---\n{}",
        res.stderr
    );
    assert!(res.stdout.is_empty());
}

#[test]
fn a4_missing_word_file_argument_is_a_usage_error() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["play"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("<WORDS>"), "stderr={}", res.stderr);
}

#[test]
fn a5_unreadable_word_file_reports_error() {
    let cli = CliRunner::new().expect("CliRunner should initialize");
    let res = cli.run(&["sim", "/no/such/list.txt", "--players", "2"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.starts_with("Error: Invalid input: cannot read word list"),
        "stderr={}",
        res.stderr
    );
}
