//! CSV-backed session recorder.
//!
//! A [`Recorder`] owns one session directory. Starting a recording creates
//! `<output_dir>/<YYYY-MM-DD_HH-MM-SS>/data.csv`, writes the header row, and
//! appends one [`TeleopSample`] per frame while the resource is present.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use chrono::Local;
use mark_core::error::RecordError;

use crate::types::TeleopSample;

/// File name of the sample table inside a session directory.
pub const DATA_FILE: &str = "data.csv";

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Resource holding the open `data.csv` writer of a recording session.
///
/// Insert it to start recording; remove it and call
/// [`finish`](Self::finish) to flush.
#[derive(Resource)]
pub struct Recorder {
    writer: csv::Writer<File>,
    session_dir: PathBuf,
    rows: u64,
}

impl Recorder {
    /// Start a session in a timestamped child of `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::SessionExists`] if a session with the same
    /// timestamp exists, or an IO/CSV error if the file cannot be written.
    pub fn start(output_dir: impl AsRef<Path>) -> Result<Self, RecordError> {
        let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        Self::create(output_dir.as_ref().join(stamp))
    }

    /// Start a session in exactly `session_dir`, which must not exist.
    ///
    /// # Errors
    ///
    /// Same as [`start`](Self::start).
    pub fn create(session_dir: impl Into<PathBuf>) -> Result<Self, RecordError> {
        let session_dir = session_dir.into();
        if session_dir.exists() {
            return Err(RecordError::SessionExists(session_dir));
        }
        fs::create_dir_all(&session_dir)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(session_dir.join(DATA_FILE))?;
        writer.write_record(TeleopSample::header())?;
        debug!("recording to {}", session_dir.display());

        Ok(Self {
            writer,
            session_dir,
            rows: 0,
        })
    }

    /// Append one sample row.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if the row cannot be written.
    pub fn write_sample(&mut self, sample: &TeleopSample) -> Result<(), RecordError> {
        self.writer.serialize(sample)?;
        self.rows += 1;
        Ok(())
    }

    /// Directory holding this session's files.
    #[must_use]
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Rows written so far, excluding the header.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush buffered rows to disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the flush fails.
    pub fn finish(&mut self) -> Result<(), RecordError> {
        self.writer.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
