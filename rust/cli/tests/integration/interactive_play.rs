// P-series: interactive play through piped stdin

use crate::helpers::asserter;
use crate::helpers::assertions::BingoAssertions;
use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

fn play_args(words: &str) -> Vec<&str> {
    vec!["play", words, "--seed", "17", "--delay-ms", "0"]
}

#[test]
fn p1_two_players_name_and_pick_cards() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 40).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let res = cli.run_with_input(&play_args(words.as_str()), "2\nana\nbo\n1\n2\n");

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Welcome to Bingo! How many people will play?"));
    assert!(res.stdout.contains("ana has the following card:"));
    assert!(res.stdout.contains("bo has the following card:"));
    asserter().assert_game_finished(&res.stdout, 2);
}

#[test]
fn p2_blank_name_falls_back_to_seat_name() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 16).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let res = cli.run_with_input(&play_args(words.as_str()), "1\n\n1\n");

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("The winner is Player 1"));
}

#[test]
fn p3_quit_exits_with_interrupted_code() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 40).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let res = cli.run_with_input(&play_args(words.as_str()), "q\n");

    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"), "stderr={}", res.stderr);
}

#[test]
fn p4_out_of_range_choice_is_fatal() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.word_list("words.txt", 40).expect("word list");
    let words = words.to_string_lossy().into_owned();

    let res = cli.run_with_input(&play_args(words.as_str()), "2\nana\nbo\n5\n");

    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Invalid card selection 4: out of range (2 cards dealt)"),
        "stderr={}",
        res.stderr
    );
    assert!(!res.stdout.contains("Turn 1"));
}
