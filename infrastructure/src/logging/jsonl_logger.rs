//! JSONL file writer for deliberation transcripts.
//!
//! Each [`TranscriptEvent`] becomes one line: the event's own fields, its
//! `type` tag and a `timestamp`. Lines are appended, so one file can hold
//! the transcripts of many deliberations (and many processes).

use deliberation_application::{TranscriptEvent, TranscriptLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One transcript line
#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a TranscriptEvent,
}

/// Appends transcript events to a file, one JSON object per line.
///
/// Every line is written with a single `write_all`, so nothing is buffered
/// in the process between events.
pub struct JsonlTranscriptLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlTranscriptLogger {
    /// Open (or create) the transcript at `path` for appending.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(file),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Could not open transcript file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(event: &TranscriptEvent) -> serde_json::Result<Vec<u8>> {
        let line = TranscriptLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event,
        };
        let mut bytes = serde_json::to_vec(&line)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, event: TranscriptEvent) {
        let bytes = match Self::encode(&event) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(event = event.event_type(), "Could not encode transcript event: {}", e);
                return;
            }
        };

        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = file.write_all(&bytes) {
            warn!(
                event = event.event_type(),
                "Could not write transcript {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deliberation_domain::{ErrorRecord, Stance};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlTranscriptLogger::new(&path).unwrap();

        logger.log(TranscriptEvent::DeliberationStarted {
            question: "Is Rust fast?".to_string(),
            run_count: 3,
            max_concurrent_runs: 1,
        });
        logger.log(TranscriptEvent::RunCompleted {
            run: 1,
            winner: Some(Stance::Pro),
            final_answer: "Yes, mostly.".to_string(),
        });

        // Written without dropping the logger
        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "deliberation_started");
        assert_eq!(records[0]["question"], "Is Rust fast?");
        assert_eq!(records[0]["run_count"], 3);
        assert_eq!(records[1]["type"], "run_completed");
        assert_eq!(records[1]["run"], 1);
        assert_eq!(records[1]["winner"], "pro");
        for record in &records {
            let timestamp = record["timestamp"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        }
    }

    #[test]
    fn test_failure_record_is_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlTranscriptLogger::new(&path).unwrap();

        logger.log(TranscriptEvent::DeliberationFailed(ErrorRecord::new(
            "con agent failed in run 1",
            "Error: con agent failed in run 1\nCaused by: timed out",
        )));

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "deliberation_failed");
        assert_eq!(records[0]["error"], "con agent failed in run 1");
        assert!(records[0]["traceback"].as_str().unwrap().contains("Caused by"));
        assert!(records[0].get("data").is_none());
    }

    #[test]
    fn test_appends_across_loggers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.jsonl");

        for run in 1..=2 {
            let logger = JsonlTranscriptLogger::new(&path).unwrap();
            logger.log(TranscriptEvent::RunCompleted {
                run,
                winner: None,
                final_answer: String::new(),
            });
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["run"], 2);
        assert!(records[1]["winner"].is_null());
    }

    #[test]
    fn test_unwritable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        assert!(JsonlTranscriptLogger::new(dir.path()).is_none());
    }
}
