//! Rest-state calibration. Two batches are taken at start-up: the first one averages the raw
//! readings into the resting orientation of the device, the second averages the gravity
//! compensated magnitude into the noise floor the derived voltage is measured against.
//!
//! Nothing here checks that the device actually stood still while calibrating, a biased batch
//! shifts every threshold downstream.
//!
use math::Vector;

use crate::{linear_acceleration, CalibrationError, Sample};

/// Average resting orientation of the device, computed once at start-up.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationVector(Vector);

impl CalibrationVector
{
    pub fn reference(&self) -> &Vector {
        &self.0
    }
}

/// Average gravity compensated magnitude of the device at rest, in g.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiezoBaseline(f32);

impl PiezoBaseline
{
    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Result of both calibration passes.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration
{
    pub orientation: CalibrationVector,
    pub baseline: PiezoBaseline,
}

/// Accumulates raw samples into a [`CalibrationVector`]. Sums are kept in `f64` so a batch of
/// identical readings averages back to exactly that reading.
///
#[derive(Debug, Clone)]
pub struct OrientationCalibrator
{
    sum: [f64; 3],
    count: usize,
    expected: usize,
}

impl OrientationCalibrator
{
    pub fn new(expected: usize) -> Result<Self, CalibrationError> {
        if expected == 0 {
            return Err(CalibrationError::NoSamples);
        }
        Ok(OrientationCalibrator { sum: [0.0; 3], count: 0, expected })
    }

    /// Adds a sample to the batch, samples past the expected amount are ignored.
    ///
    pub fn push(&mut self, sample: &Sample) {
        if self.is_complete() {
            return;
        }
        self.sum[0] += sample.x as f64;
        self.sum[1] += sample.y as f64;
        self.sum[2] += sample.z as f64;
        self.count += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.count >= self.expected
    }

    pub fn finish(self) -> Result<CalibrationVector, CalibrationError> {
        if !self.is_complete() {
            return Err(CalibrationError::Incomplete { expected: self.expected, received: self.count });
        }
        let n = self.count as f64;
        let reference = Vector::new(
            (self.sum[0] / n) as f32,
            (self.sum[1] / n) as f32,
            (self.sum[2] / n) as f32,
        );
        log::info!("Calibrated rest orientation: {:?}", reference);
        Ok(CalibrationVector(reference))
    }
}

/// Accumulates the linear acceleration magnitude of raw samples into a [`PiezoBaseline`].
///
#[derive(Debug, Clone)]
pub struct BaselineCalibrator
{
    sum: f64,
    count: usize,
    expected: usize,
}

impl BaselineCalibrator
{
    pub fn new(expected: usize) -> Result<Self, CalibrationError> {
        if expected == 0 {
            return Err(CalibrationError::NoSamples);
        }
        Ok(BaselineCalibrator { sum: 0.0, count: 0, expected })
    }

    pub fn push(&mut self, sample: &Sample) {
        if self.is_complete() {
            return;
        }
        self.sum += linear_acceleration(sample).magnitude as f64;
        self.count += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.count >= self.expected
    }

    pub fn finish(self) -> Result<PiezoBaseline, CalibrationError> {
        if !self.is_complete() {
            return Err(CalibrationError::Incomplete { expected: self.expected, received: self.count });
        }
        let baseline = (self.sum / self.count as f64) as f32;
        log::info!("Calibrated piezo baseline: {:.4} g", baseline);
        Ok(PiezoBaseline(baseline))
    }
}

/// Per-axis mean of the first `n` samples of the batch.
///
pub fn calibrate_orientation(samples: &[Sample], n: usize) -> Result<CalibrationVector, CalibrationError> {
    let mut calibrator = OrientationCalibrator::new(n)?;
    samples.iter().take(n).for_each(|sample| calibrator.push(sample));
    calibrator.finish()
}

/// Mean linear acceleration magnitude of the first `n` samples of the batch.
///
pub fn calibrate_piezo_baseline(samples: &[Sample], n: usize) -> Result<PiezoBaseline, CalibrationError> {
    let mut calibrator = BaselineCalibrator::new(n)?;
    samples.iter().take(n).for_each(|sample| calibrator.push(sample));
    calibrator.finish()
}
