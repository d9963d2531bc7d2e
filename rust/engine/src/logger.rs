use serde::{Deserialize, Serialize};

use crate::hand::Category;
use crate::session::GameMode;

/// One submitted hand inside a run record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandEntry {
    /// Category the hand evaluated to
    pub category: Category,
    /// Points actually awarded (after any doubling/multiplier)
    pub points: i64,
    /// Whether the final-stretch doubling applied
    pub final_stretch: bool,
    /// Streak multiplier in effect (1.0 outside Sharp Shooter)
    pub multiplier: f64,
}

/// Complete record of one run: every scored hand plus the outcome.
/// Serialized to JSONL format for run history storage and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique identifier for this run (format: YYYYMMDD-NNNNNN)
    pub run_id: String,
    /// RNG seed for the session (enables deterministic replay)
    pub seed: Option<u64>,
    /// Game mode the run was played in
    pub mode: GameMode,
    /// Chronological list of scored hands
    pub hands: Vec<HandEntry>,
    /// Final score after end-of-run bonuses and penalties
    pub final_score: i64,
    /// Star rating per completed level (Sharp Shooter only)
    #[serde(default)]
    pub stars: Vec<u8>,
    /// Timestamp when the run finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_run_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RunLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RunLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    /// Logger with no sink, for id sequencing in tests.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_run_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RunRecord) -> std::io::Result<()> {
        // inject timestamp if missing
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
