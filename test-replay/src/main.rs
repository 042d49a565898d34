use std::{env, error::Error, fs::File, io::{BufRead, BufReader}, path::Path};

use detection::*;

mod source;
use source::CsvSource;

static USAGE: &str = "usage: test-replay replay <samples.csv> | test-replay bridge <serial.log>";

/// Prints everything the monitor reports, exactly as the device would on its serial port, and
/// runs it through the bridge like the receiving end would.
///
#[derive(Default)]
struct ConsoleReporter
{
    bridge: AlertBridge,
    alerts: usize,
}

impl Reporter for ConsoleReporter
{
    fn report(&mut self, event: &Event) {
        let text = event.to_string();
        println!("{}", text);
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if let BridgeOutput::Alert(estimate) = self.bridge.feed(line) {
                self.alerts += 1;
                log::info!("Estimated magnitude: {} on Richter scale", estimate);
            }
        }
    }
}

/// Runs a recorded set of samples through calibration and detection on simulated time.
///
fn replay(path: &Path) -> Result<(), Box<dyn Error>> {
    let source = CsvSource::open(path)?;
    // Recordings occasionally contain a garbled row, skip those instead of stopping.
    let config = DetectorConfig {
        read_policy: ReadPolicy::Retry { attempts: 3, backoff_ms: 0 },
        ..DetectorConfig::DEFAULT
    };
    let mut monitor = Monitor::start(config, source, SimulatedClock::new(), ConsoleReporter::default())?;

    loop {
        match monitor.cycle() {
            Ok(_) => {}
            Err(SensorReadError::EndOfStream) => break,
            Err(err) => return Err(err.into()),
        }
    }

    log::info!(
        "Replay finished after {} ms of simulated time with {} alert(s)",
        monitor.timer().now_ms(),
        monitor.reporter().alerts,
    );
    Ok(())
}

/// Feeds a captured serial log through the bridge.
///
fn bridge(path: &Path) -> Result<(), Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut bridge = AlertBridge::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let BridgeOutput::Alert(estimate) = bridge.feed(&line) {
            println!("alert,{}", estimate);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(USAGE.into());
    }

    let path = Path::new(&args[2]);
    match args[1].as_str() {
        "replay" => replay(path),
        "bridge" => bridge(path),
        _ => Err(USAGE.into()),
    }
}
