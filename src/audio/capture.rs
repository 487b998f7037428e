use anyhow::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Audio capture collaborator
///
/// Abstracts the microphone (or any other sample source) behind the narrow
/// surface a recording session needs: start/stop, the total number of samples
/// written so far, and a non-blocking copy of a range of captured samples.
/// Samples are mono, normalized to [-1.0, 1.0], at the session's sample rate.
pub trait AudioCapture: Send {
    /// Begin capturing. `capacity` bounds how much audio the device buffers.
    fn start(&mut self, capacity: Duration) -> Result<()>;

    /// Stop capturing
    fn stop(&mut self) -> Result<()>;

    /// Total number of samples written since `start`
    fn write_position(&self) -> u64;

    /// Copy samples in `[from, write_position())` into `out`. Never blocks.
    fn read_from(&self, from: u64, out: &mut Vec<f32>) -> Result<()>;
}

/// In-memory capture source
///
/// Samples are pushed in by the driver (a test, or the demo binary replaying a
/// file) and read back by the session on each tick. Clones share the same
/// underlying buffer, so the driver keeps a handle while the session owns the
/// collaborator.
#[derive(Clone, Default)]
pub struct MemoryCapture {
    inner: Arc<Mutex<CaptureState>>,
}

#[derive(Default)]
struct CaptureState {
    samples: Vec<f32>,
    capturing: bool,
}

impl MemoryCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append captured samples. Ignored while not capturing.
    pub fn push_samples(&self, samples: &[f32]) {
        let mut state = self.inner.lock().expect("capture state poisoned");
        if state.capturing {
            state.samples.extend_from_slice(samples);
        }
    }
}

impl AudioCapture for MemoryCapture {
    fn start(&mut self, _capacity: Duration) -> Result<()> {
        let mut state = self.inner.lock().expect("capture state poisoned");
        state.samples.clear();
        state.capturing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let mut state = self.inner.lock().expect("capture state poisoned");
        state.capturing = false;
        Ok(())
    }

    fn write_position(&self) -> u64 {
        let state = self.inner.lock().expect("capture state poisoned");
        state.samples.len() as u64
    }

    fn read_from(&self, from: u64, out: &mut Vec<f32>) -> Result<()> {
        let state = self.inner.lock().expect("capture state poisoned");
        let from = (from as usize).min(state.samples.len());
        out.extend_from_slice(&state.samples[from..]);
        Ok(())
    }
}
