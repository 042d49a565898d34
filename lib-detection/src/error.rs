use core::{error::Error, fmt};

/// Failure to get a reading out of a [`crate::SampleSource`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorReadError
{
    /// The bus transaction with the sensor failed.
    Bus,

    /// The sensor answered but the data could not be turned into a sample.
    InvalidData,

    /// A recorded source has no samples left.
    EndOfStream,
}

impl Error for SensorReadError {}

impl fmt::Display for SensorReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "Sensor bus transaction failed"),
            Self::InvalidData => write!(f, "Sensor returned invalid data"),
            Self::EndOfStream => write!(f, "Sample source is exhausted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError
{
    /// A calibration batch of zero samples was requested.
    NoSamples,

    /// The batch ended before the requested amount of samples was seen.
    Incomplete { expected: usize, received: usize },
}

impl Error for CalibrationError {}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoSamples => write!(f, "Calibration needs at least one sample"),
            Self::Incomplete { expected, received } => write!(
                f, "Calibration expected {} samples but only got {}", expected, received
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError
{
    NoCalibrationSamples,
    NoRequiredSpikes,
    NoSamplePeriod,
    NegativeThreshold,
    NoRetryAttempts,
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoCalibrationSamples => write!(f, "Calibration sample counts must be non-zero"),
            Self::NoRequiredSpikes => write!(f, "At least one consecutive spike must be required"),
            Self::NoSamplePeriod => write!(f, "Sample period must be non-zero"),
            Self::NegativeThreshold => write!(f, "Thresholds and scale factors must not be negative"),
            Self::NoRetryAttempts => write!(f, "Retry policy needs at least one attempt"),
        }
    }
}

/// Everything that can stop the detection monitor.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError
{
    Config(ConfigError),
    Calibration(CalibrationError),
    Sensor(SensorReadError),
}

impl Error for MonitorError {}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Configuration error: {}", err),
            Self::Calibration(err) => write!(f, "Calibration error: {}", err),
            Self::Sensor(err) => write!(f, "Sensor error: {}", err),
        }
    }
}

impl From<ConfigError> for MonitorError
{
    fn from(err: ConfigError) -> Self {
        MonitorError::Config(err)
    }
}

impl From<CalibrationError> for MonitorError
{
    fn from(err: CalibrationError) -> Self {
        MonitorError::Calibration(err)
    }
}

impl From<SensorReadError> for MonitorError
{
    fn from(err: SensorReadError) -> Self {
        MonitorError::Sensor(err)
    }
}
