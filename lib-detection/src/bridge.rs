//! Receiving end of the serial line. Keeps the last few reported magnitudes around so that an
//! alert can be tagged with a rough magnitude estimate before it is forwarded.
//!
use core::fmt;

use heapless::HistoryBuffer;

use crate::{TelemetryLine, TelemetryRecord};

/// Amount of readings the estimate is based on.
pub const BRIDGE_HISTORY: usize = 5;

/// Rough Richter-like magnitude. The mapping is empirical and only meant to spread typical
/// readings over a 3 to 6 range, it is not a seismological measurement.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeEstimate(f32);

impl MagnitudeEstimate
{
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for MagnitudeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Estimates a magnitude from a set of reported readings, an empty set gives 0.
///
pub fn estimate_magnitude(readings: &[f32]) -> MagnitudeEstimate {
    let average = match math::mean(readings.iter().sum(), readings.len()) {
        Some(average) => average,
        None => return MagnitudeEstimate(0.0),
    };
    let log = libm::log10f(average / 9.81 + 1e-6);
    MagnitudeEstimate(3.0 + (log + 3.0) * 0.75)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeOutput<'a>
{
    Reading(TelemetryLine),
    Alert(MagnitudeEstimate),
    Message(&'a str),
}

#[derive(Debug, Default)]
pub struct AlertBridge
{
    recent: HistoryBuffer<f32, BRIDGE_HISTORY>,
}

impl AlertBridge
{
    pub fn new() -> Self {
        AlertBridge { recent: HistoryBuffer::new() }
    }

    /// Amount of readings currently kept for the next estimate.
    ///
    pub fn buffered(&self) -> usize {
        self.recent.len()
    }

    /// Handles one received line. An alert consumes the buffered readings.
    ///
    pub fn feed<'a>(&mut self, line: &'a str) -> BridgeOutput<'a> {
        match TelemetryRecord::parse(line) {
            TelemetryRecord::Reading(reading) => {
                self.recent.write(reading.magnitude);
                log::debug!(
                    "Vibration: {} | Tilt: {} | Piezo: {}",
                    reading.magnitude, reading.tilt_degrees, reading.derived_voltage
                );
                BridgeOutput::Reading(reading)
            }
            TelemetryRecord::Alert => {
                let estimate = estimate_magnitude(self.recent.as_slice());
                log::warn!("Alert received, estimated magnitude {}", estimate);
                self.recent.clear();
                BridgeOutput::Alert(estimate)
            }
            TelemetryRecord::Message(message) => {
                log::info!("System message: {}", message);
                BridgeOutput::Message(message)
            }
        }
    }
}
