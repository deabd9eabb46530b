use serde::{Deserialize, Serialize};

use crate::game::TurnReport;

/// One called word, as written to the turn log.
/// Serialized to JSONL, one record per turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Game identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed the game was dealt and called with
    pub seed: Option<u64>,
    pub turn: u32,
    pub word: String,
    /// `NOBODY_HAD_IT`, `MARKED` or `WON:<owner>`
    pub outcome: String,
    #[serde(default)]
    pub owner: Option<String>,
    /// Cards still in play after the turn
    pub active_cards: usize,
    /// Timestamp when the turn was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl TurnRecord {
    pub fn from_report(game_id: &str, seed: Option<u64>, report: &TurnReport) -> Self {
        Self {
            game_id: game_id.to_string(),
            seed,
            turn: report.turn,
            word: report.word.clone(),
            outcome: report.outcome.to_string(),
            owner: report.outcome.owner().map(str::to_string),
            active_cards: report.active.len(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct TurnLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl TurnLogger {
    /// Open `path` for writing, creating parent directories. An existing
    /// file is truncated.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that numbers games but writes nowhere.
    pub fn discard(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_game_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for TurnLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnLogger")
            .field("writing", &self.writer.is_some())
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}
