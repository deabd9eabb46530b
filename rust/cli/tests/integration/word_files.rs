// W-series: word list parsing at the command line

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

#[test]
fn w1_compressed_word_list_is_read() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let text: String = (0..16).map(|i| format!("w{}\n", i)).collect();
    let packed = zstd::bulk::compress(text.as_bytes(), 3).expect("compress");
    let path = tfm.path().join("words.txt.zst");
    std::fs::write(&path, packed).expect("write zst");
    let path = path.to_string_lossy().into_owned();

    let res = cli.run(&["sim", path.as_str(), "--players", "1", "--seed", "1"]);

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("The winner is Player 1"));
}

#[test]
fn w2_blank_lines_become_free_spaces() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let mut text: String = (0..12).map(|i| format!("w{}\n", i)).collect();
    text.push_str("\n\n\n\n");
    let path = tfm.create_file("words.txt", &text).expect("word list");
    let path = path.to_string_lossy().into_owned();

    let res = cli.run(&["sim", path.as_str(), "--players", "1", "--seed", "1"]);

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    // Twelve real words to mark: eleven plain marks and the winning one
    assert_eq!(res.stdout.matches(" in their card.").count(), 11, "{}", res.stdout);
    assert!(res.stdout.contains("The winner is Player 1"));
}

#[test]
fn w3_repeated_words_warn_and_count_once() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let mut text: String = (0..16).map(|i| format!("w{}\n", i)).collect();
    text.push_str("w0\nw1\n");
    let path = tfm.create_file("words.txt", &text).expect("word list");
    let path = path.to_string_lossy().into_owned();

    let res = cli.run(&["sim", path.as_str(), "--players", "1", "--seed", "1"]);

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.contains("WARNING: 2 repeated words"));
    // Only the 16 distinct words are called, each one a mark.
    assert!(
        res.stdout.contains("Game over after 16 turns (16 marks, 0 words nobody had)."),
        "{}",
        res.stdout
    );
}
