use math::Vector;

use crate::{Calibration, CalibrationVector, DetectorConfig, PiezoBaseline, Sample};

/// In g; gravity is assumed to sit entirely on the z-axis while the device is at rest.
pub const REST_GRAVITY: f32 = 1.0;

/// Sample with the assumed gravity component removed.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAcceleration
{
    pub vector: Vector,
    pub magnitude: f32,
}

/// Values derived from one sample, they only live for a single detection cycle.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features
{
    /// In g; magnitude of the gravity compensated acceleration.
    pub linear_magnitude: f32,

    /// In degrees; angle between the sample and the calibrated rest orientation.
    pub tilt_degrees: f32,

    /// Piezo-like signal derived from the magnitude's excess over the calibrated baseline.
    pub derived_voltage: f32,
}

impl Features
{
    /// The magnitude as it is carried into the next cycle and reported: once it exceeds the
    /// vibration threshold it is scaled by the amplification factor. The threshold test itself
    /// always looks at the unscaled value.
    ///
    pub fn amplified_magnitude(&self, config: &DetectorConfig) -> f32 {
        if self.linear_magnitude > config.vibration_threshold {
            self.linear_magnitude * config.amplification
        } else {
            self.linear_magnitude
        }
    }
}

pub fn linear_acceleration(sample: &Sample) -> LinearAcceleration {
    let vector = Vector::new(sample.x, sample.y, sample.z - REST_GRAVITY);
    LinearAcceleration { vector, magnitude: vector.magnitude() }
}

/// Tilt of the sample away from the rest orientation, in degrees.
///
pub fn tilt(sample: &Sample, calibration: &CalibrationVector) -> f32 {
    sample.angle_to(calibration.reference())
}

pub fn derived_voltage(magnitude: f32, baseline: PiezoBaseline, scale: f32) -> f32 {
    let relative = libm::fmaxf(0.0, magnitude - baseline.value());
    relative * scale
}

/// Turns raw samples into [`Features`] using the start-up calibration.
///
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor
{
    calibration: Calibration,
    voltage_scale: f32,
}

impl FeatureExtractor
{
    pub fn new(calibration: Calibration, config: &DetectorConfig) -> Self {
        FeatureExtractor { calibration, voltage_scale: config.voltage_scale }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn extract(&self, sample: &Sample) -> Features {
        let linear = linear_acceleration(sample);
        Features {
            linear_magnitude: linear.magnitude,
            tilt_degrees: tilt(sample, &self.calibration.orientation),
            derived_voltage: derived_voltage(linear.magnitude, self.calibration.baseline, self.voltage_scale),
        }
    }
}
