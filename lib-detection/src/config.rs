use crate::ConfigError;

/// What the monitor does when the sample source fails to produce a reading.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy
{
    /// Give up immediately and hand the error to the caller.
    Halt,

    /// Re-read up to `attempts` more times, waiting `backoff_ms` before each retry.
    Retry { attempts: u8, backoff_ms: u32 },
}

/// Compiled-in tuning of the detector. None of these change at runtime.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig
{
    /// In g; minimum change of linear acceleration magnitude between two cycles that counts as a
    /// vibration spike. Also the level above which the magnitude gets amplified.
    pub vibration_threshold: f32,

    /// In degrees; minimum tilt away from the calibrated rest orientation.
    pub tilt_threshold: f32,

    /// Minimum derived voltage, in the same unit as `voltage_scale` produces.
    pub voltage_threshold: f32,

    /// In milliseconds; spike evaluation is suppressed until this much time has passed since the
    /// last reset.
    pub grace_ms: u64,

    /// Amount of back-to-back passing cycles needed before an alert is raised.
    pub required_spikes: u32,

    /// Amount of samples averaged into the rest orientation.
    pub orientation_samples: usize,

    /// Amount of samples averaged into the piezo baseline.
    pub baseline_samples: usize,

    /// In milliseconds; pause between two calibration samples.
    pub calibration_delay_ms: u32,

    /// In milliseconds; how long the monitor stays quiet after an alert.
    pub cooldown_ms: u32,

    /// In milliseconds; pause between two detection cycles (~20 Hz).
    pub sample_period_ms: u32,

    /// Empirical factor turning excess acceleration (g) into a piezo-like voltage (mV). This
    /// stands in for a sensor that is not actually fitted, it is not a measured response curve.
    pub voltage_scale: f32,

    /// Factor applied to the magnitude once it exceeds the vibration threshold, the amplified
    /// value is what the next cycle compares against.
    pub amplification: f32,

    pub read_policy: ReadPolicy,
}

impl DetectorConfig
{
    pub const DEFAULT: DetectorConfig = DetectorConfig {
        vibration_threshold: 0.2,
        tilt_threshold: 1.0,
        voltage_threshold: 3.0,
        grace_ms: 500,
        required_spikes: 2,
        orientation_samples: 100,
        baseline_samples: 100,
        calibration_delay_ms: 1,
        cooldown_ms: 5000,
        sample_period_ms: 50,
        voltage_scale: 800.0,
        amplification: 1.5,
        read_policy: ReadPolicy::Halt,
    };

    /// Checks that the constants describe a detector that can actually run. Threshold values
    /// themselves are trusted, only their sign is checked.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orientation_samples == 0 || self.baseline_samples == 0 {
            return Err(ConfigError::NoCalibrationSamples);
        }
        if self.required_spikes == 0 {
            return Err(ConfigError::NoRequiredSpikes);
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::NoSamplePeriod);
        }
        let scalars = [
            self.vibration_threshold,
            self.tilt_threshold,
            self.voltage_threshold,
            self.voltage_scale,
            self.amplification,
        ];
        if scalars.iter().any(|value| !(*value >= 0.0)) {
            return Err(ConfigError::NegativeThreshold);
        }
        if let ReadPolicy::Retry { attempts: 0, .. } = self.read_policy {
            return Err(ConfigError::NoRetryAttempts);
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
