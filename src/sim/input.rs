//! Knob sampling
//!
//! Converts raw analog readings into a normalized position and a lane.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::clamp_unit;

/// A synchronous source of raw analog readings in `[0, max_raw]`
pub trait InputSource {
    fn read(&mut self) -> u16;
}

impl<F: FnMut() -> u16> InputSource for F {
    fn read(&mut self) -> u16 {
        self()
    }
}

/// Normalizes an [`InputSource`] into `[0, 1]`
///
/// The scale is inverted so that turning the knob clockwise moves the runner
/// to the right on a typically wired potentiometer. Readings above `max_raw`
/// are clamped rather than passed through.
#[derive(Debug)]
pub struct InputSampler<I> {
    source: I,
    max_raw: u16,
}

impl<I: InputSource> InputSampler<I> {
    pub fn new(source: I, max_raw: u16) -> Self {
        debug_assert!(max_raw > 0, "max_raw validated by Settings");
        Self { source, max_raw }
    }

    /// Raw reading, clamped to `max_raw`
    pub fn read(&mut self) -> u16 {
        self.source.read().min(self.max_raw)
    }

    /// Read the source and normalize: `1 - raw / max_raw`
    pub fn sample(&mut self) -> f32 {
        let raw = self.read();
        1.0 - raw as f32 / self.max_raw as f32
    }

    /// Lane under a raw reading
    ///
    /// Same as `lane_of(1 - raw / max_raw, columns)` but in integers, so a
    /// position that is exactly on a lane boundary never rounds down a lane.
    pub fn lane(&self, raw: u16, columns: usize) -> usize {
        let max = u64::from(self.max_raw);
        let last = columns.saturating_sub(1);
        let travel = max - u64::from(raw).min(max);
        let lane = (travel * last as u64 / max) as usize;
        lane.min(last)
    }
}

/// Lane under a normalized position: `floor(position * (columns - 1))`
pub fn lane_of(position: f32, columns: usize) -> usize {
    let last = columns.saturating_sub(1);
    let lane = (f64::from(clamp_unit(position)) * last as f64).floor() as usize;
    lane.min(last)
}

/// Most recent completed raw reading, readable without tearing
#[derive(Debug, Default)]
pub struct LatestReading(AtomicU16);

impl LatestReading {
    pub fn new(raw: u16) -> Self {
        Self(AtomicU16::new(raw))
    }

    pub fn store(&self, raw: u16) {
        self.0.store(raw, Ordering::Relaxed);
    }

    pub fn load(&self) -> u16 {
        self.0.load(Ordering::Relaxed)
    }
}
