use serde_json::Value;

#[allow(dead_code)]
pub trait BingoAssertions {
    fn assert_help_contains_commands(&self, help_text: &str);
    fn assert_game_finished(&self, stdout: &str, winners: usize);
    fn assert_jsonl_format(&self, content: &str);
    fn assert_turn_log(&self, content: &str, winners: usize);
}

#[derive(Debug, Default, Copy, Clone)]
#[allow(dead_code)]
pub struct DefaultAsserter;

#[allow(dead_code)]
pub(crate) fn commands_list() -> &'static [&'static str] {
    &["play", "sim", "cfg"]
}

impl BingoAssertions for DefaultAsserter {
    fn assert_help_contains_commands(&self, help_text: &str) {
        for c in commands_list() {
            assert!(
                help_text.contains(c),
                "help should contain command `{}`\n---help---\n{}\n----------",
                c,
                help_text
            );
        }
    }

    fn assert_game_finished(&self, stdout: &str, winners: usize) {
        assert_eq!(
            stdout.matches("The winner is").count(),
            winners,
            "unexpected number of winners\n---stdout---\n{}",
            stdout
        );
        assert!(
            stdout.contains("Game over after"),
            "summary missing\n---stdout---\n{}",
            stdout
        );
    }

    fn assert_jsonl_format(&self, content: &str) {
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parsed: Result<Value, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "line {} is not valid JSON: {}", i + 1, line);
        }
    }

    fn assert_turn_log(&self, content: &str, winners: usize) {
        self.assert_jsonl_format(content);
        let records: Vec<Value> = content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("valid json"))
            .collect();
        assert!(!records.is_empty(), "turn log is empty");

        for (i, record) in records.iter().enumerate() {
            for field in ["game_id", "turn", "word", "outcome", "active_cards", "ts"] {
                assert!(
                    record.get(field).is_some(),
                    "record {} missing `{}`: {}",
                    i + 1,
                    field,
                    record
                );
            }
            assert_eq!(record["turn"].as_u64(), Some(i as u64 + 1));
        }

        let won = records
            .iter()
            .filter(|r| r["outcome"].as_str().is_some_and(|o| o.starts_with("WON:")))
            .count();
        assert_eq!(won, winners, "unexpected number of WON records");
    }
}

#[allow(dead_code)]
pub fn asserter() -> DefaultAsserter {
    DefaultAsserter
}
