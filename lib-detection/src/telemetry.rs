use core::fmt;

/// Line printed when an alert is raised, the bridge on the other end of the serial port keys on
/// this exact text.
pub const ALERT_MARKER: &str = "ALERT,ALERT,ALERT";

/// Older firmware printed the marker with spaces.
const ALERT_MARKER_SPACED: &str = "ALERT ALERT ALERT";

/// One steady-state status line: reported magnitude, tilt and derived voltage.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryLine
{
    pub magnitude: f32,
    pub tilt_degrees: f32,
    pub derived_voltage: f32,
}

impl fmt::Display for TelemetryLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2},{:.2},{:.2}", self.magnitude, self.tilt_degrees, self.derived_voltage)
    }
}

/// Output of the monitor loop.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event
{
    Telemetry(TelemetryLine),

    /// An alert was raised, detection resumes after `cooldown_ms`.
    Alert { cooldown_ms: u32 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Telemetry(line) => write!(f, "{}", line),
            Self::Alert { cooldown_ms } => {
                writeln!(f, "{}", ALERT_MARKER)?;
                write!(f, "\nSystem resetting in {}s...\n", *cooldown_ms as f32 / 1000.0)
            }
        }
    }
}

/// A line as it comes out of the serial port on the receiving end.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryRecord<'a>
{
    Reading(TelemetryLine),
    Alert,

    /// Anything else the device printed, e.g. the reset notice.
    Message(&'a str),
}

impl<'a> TelemetryRecord<'a>
{
    pub fn parse(line: &'a str) -> TelemetryRecord<'a> {
        let line = line.trim();
        if line.contains(ALERT_MARKER) || line.contains(ALERT_MARKER_SPACED) {
            return TelemetryRecord::Alert;
        }

        let mut values = [0.0f32; 3];
        let mut fields = line.split(',');
        for value in values.iter_mut() {
            match fields.next().map(|field| field.trim().parse::<f32>()) {
                Some(Ok(parsed)) if !parsed.is_nan() => *value = parsed,
                _ => return TelemetryRecord::Message(line),
            }
        }
        if fields.next().is_some() {
            return TelemetryRecord::Message(line);
        }

        TelemetryRecord::Reading(TelemetryLine {
            magnitude: values[0],
            tilt_degrees: values[1],
            derived_voltage: values[2],
        })
    }
}
