//! Recording save and replay
//!
//! The mobile recorder app exports one CSV per capture: one comma-separated
//! row per axis, x first, then an optional y row, then z. Replay accepts both
//! the 2-row (x, z) and 3-row (x, y, z) layouts and ignores the y row; save
//! writes the 2-row layout.

use std::path::{Path, PathBuf};

use vibroscale_core::signal::BiaxialRecording;

use crate::source::{CaptureError, SignalSource};

fn parse_row(record: &csv::StringRecord, axis: &str) -> Result<Vec<f64>, CaptureError> {
    record
        .iter()
        .map(|field| {
            field.trim().parse::<f64>().map_err(|_| {
                CaptureError::MalformedRecording(format!(
                    "non-numeric sample {field:?} in {axis} row"
                ))
            })
        })
        .collect()
}

/// Read a recording from a row-per-axis CSV file
///
/// # Errors
/// I/O and CSV errors from the underlying reader; `MalformedRecording` for a
/// row count other than 2 or 3 or for non-numeric samples; `InvalidInput`
/// (via `Estimation`) if the axis rows have different lengths.
pub fn read_recording<P: AsRef<Path>>(path: P) -> Result<BiaxialRecording, CaptureError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    let (x_row, z_row) = match rows.len() {
        2 => (&rows[0], &rows[1]),
        3 => (&rows[0], &rows[2]),
        n => {
            return Err(CaptureError::MalformedRecording(format!(
                "expected 2 or 3 axis rows, found {n}"
            )))
        }
    };

    let x = parse_row(x_row, "x")?;
    let z = parse_row(z_row, "z")?;
    log::info!(
        "replayed {} samples per axis from {}",
        x.len(),
        path.display()
    );
    Ok(BiaxialRecording::new(x, z)?)
}

/// Write a recording as a 2-row (x, z) CSV file
///
/// Samples are written with `f64`'s shortest round-trip formatting, so a
/// read-back reproduces the recording exactly.
///
/// # Errors
/// I/O and CSV errors from the underlying writer.
pub fn write_recording<P: AsRef<Path>>(
    path: P,
    recording: &BiaxialRecording,
) -> Result<(), CaptureError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    let row = |samples: &[f64]| samples.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    writer.write_record(row(recording.x()))?;
    writer.write_record(row(recording.z()))?;
    writer.flush()?;

    log::info!(
        "saved {} samples per axis to {}",
        recording.len(),
        path.display()
    );
    Ok(())
}

/// A signal source replaying one recorded file
#[derive(Debug, Clone)]
pub struct ReplaySource {
    path: PathBuf,
}

impl ReplaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignalSource for ReplaySource {
    fn capture(&mut self, samples: usize) -> Result<BiaxialRecording, CaptureError> {
        let recording = read_recording(&self.path)?;
        if recording.len() != samples {
            return Err(CaptureError::MalformedRecording(format!(
                "recorded window holds {} samples per axis, expected {}",
                recording.len(),
                samples
            )));
        }
        Ok(recording)
    }
}
