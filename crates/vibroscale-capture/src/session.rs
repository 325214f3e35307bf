//! Live recording session
//!
//! Accumulates sample pairs as they arrive and keeps only the most recent
//! window, as a live capture UI does with its last 10 seconds of 100 Hz
//! data: once the buffer is full, every new sample evicts the oldest.

use std::collections::VecDeque;

use vibroscale_core::signal::BiaxialRecording;

use crate::source::CaptureError;

/// Ring-buffered biaxial sample window
#[derive(Debug, Clone)]
pub struct RecordingSession {
    window: usize,
    x: VecDeque<f64>,
    z: VecDeque<f64>,
}

impl RecordingSession {
    /// Create a session holding at most `window` samples per axis
    ///
    /// # Panics
    /// If `window` is zero.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "window must hold at least one sample");
        Self {
            window,
            x: VecDeque::with_capacity(window),
            z: VecDeque::with_capacity(window),
        }
    }

    /// Append one sample pair, evicting the oldest once the window is full
    pub fn push(&mut self, x: f64, z: f64) {
        if self.x.len() == self.window {
            self.x.pop_front();
            self.z.pop_front();
        }
        self.x.push_back(x);
        self.z.push_back(z);
    }

    /// Samples currently buffered per axis
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Whether a full window has been buffered
    pub fn is_full(&self) -> bool {
        self.x.len() == self.window
    }

    /// Snapshot the buffered samples as a recording
    ///
    /// A partial window is allowed - the inference core accepts any length.
    /// Callers that want exactly the nominal window should wait for
    /// [`is_full`](Self::is_full).
    ///
    /// # Errors
    /// `MalformedRecording` while the buffer is empty.
    pub fn snapshot(&self) -> Result<BiaxialRecording, CaptureError> {
        if self.is_empty() {
            return Err(CaptureError::MalformedRecording(
                "no samples buffered".into(),
            ));
        }
        log::debug!("snapshotting {} of {} samples", self.len(), self.window);
        Ok(BiaxialRecording::new(
            self.x.iter().copied().collect(),
            self.z.iter().copied().collect(),
        )?)
    }

    /// Discard all buffered samples
    pub fn clear(&mut self) {
        self.x.clear();
        self.z.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_to_window() {
        let mut session = RecordingSession::new(4);
        assert!(session.is_empty());
        for k in 0..4 {
            session.push(k as f64, -(k as f64));
        }
        assert!(session.is_full());
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut session = RecordingSession::new(3);
        for k in 0..5 {
            session.push(k as f64, 10.0 + k as f64);
        }
        assert_eq!(session.len(), 3);

        let recording = session.snapshot().unwrap();
        assert_eq!(recording.x(), &[2.0, 3.0, 4.0]);
        assert_eq!(recording.z(), &[12.0, 13.0, 14.0]);
    }

    #[test]
    fn test_partial_snapshot_allowed() {
        let mut session = RecordingSession::new(1000);
        session.push(0.1, -1.0);
        session.push(0.2, -0.9);

        let recording = session.snapshot().unwrap();
        assert_eq!(recording.len(), 2);
    }

    #[test]
    fn test_empty_snapshot_rejected() {
        let session = RecordingSession::new(10);
        let err = session.snapshot().unwrap_err();
        assert!(matches!(err, CaptureError::MalformedRecording(_)));
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut session = RecordingSession::new(3);
        session.push(1.0, 2.0);
        session.clear();
        assert!(session.is_empty());
        assert!(session.snapshot().is_err());
    }

    #[test]
    #[should_panic(expected = "window must hold at least one sample")]
    fn test_zero_window_panics() {
        let _ = RecordingSession::new(0);
    }
}
