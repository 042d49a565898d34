use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::*;

/// Receives everything the monitor has to say, on the device this ends up on the serial console.
///
pub trait Reporter
{
    fn report(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Reporter for F
{
    fn report(&mut self, event: &Event) {
        self(event)
    }
}

/// The detection loop: calibrates once, then samples at a fixed period, feeds the spike
/// detector and reports telemetry or alerts. All waiting goes through `timer` so the same loop
/// runs on the device and against a [`SimulatedClock`].
///
pub struct Monitor<S, T, R>
{
    source: S,
    timer: T,
    reporter: R,
    extractor: FeatureExtractor,
    detector: SpikeDetector,
}

impl<S, T, R> Monitor<S, T, R>
where
    S: SampleSource,
    T: Clock + DelayNs,
    R: Reporter,
{
    /// Validates the configuration and runs both calibration passes, detection starts right
    /// after with a fresh grace window.
    ///
    pub fn start(config: DetectorConfig, mut source: S, mut timer: T, reporter: R) -> Result<Self, MonitorError> {
        config.validate()?;

        log::info!("Calibrating, keep the device still");
        let mut orientation = OrientationCalibrator::new(config.orientation_samples)?;
        while !orientation.is_complete() {
            let sample = read_with_policy(&mut source, &mut timer, &config.read_policy)?;
            orientation.push(&sample);
            timer.delay_ms(config.calibration_delay_ms);
        }
        let orientation = orientation.finish()?;

        let mut baseline = BaselineCalibrator::new(config.baseline_samples)?;
        while !baseline.is_complete() {
            let sample = read_with_policy(&mut source, &mut timer, &config.read_policy)?;
            baseline.push(&sample);
            timer.delay_ms(config.calibration_delay_ms);
        }
        let baseline = baseline.finish()?;

        let extractor = FeatureExtractor::new(Calibration { orientation, baseline }, &config);
        let detector = SpikeDetector::new(config, timer.now_ms());
        log::info!("Calibration done, watching for spikes");

        Ok(Monitor { source, timer, reporter, extractor, detector })
    }

    pub fn calibration(&self) -> &Calibration {
        self.extractor.calibration()
    }

    pub fn detector(&self) -> &SpikeDetector {
        &self.detector
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Runs a single detection cycle. An alert cycle blocks for the whole cooldown and resets the
    /// detector before returning, it does not print telemetry nor wait the sample period.
    ///
    pub fn cycle(&mut self) -> Result<Verdict, SensorReadError> {
        let config = *self.detector.config();
        let sample = read_with_policy(&mut self.source, &mut self.timer, &config.read_policy)?;
        let features = self.extractor.extract(&sample);
        let verdict = self.detector.update(&features, self.timer.now_ms());

        if verdict == Verdict::Alert {
            self.reporter.report(&Event::Alert { cooldown_ms: config.cooldown_ms });
            self.timer.delay_ms(config.cooldown_ms);
            self.detector.reset(self.timer.now_ms());
            log::info!("Cooldown over, detection state reset");
            return Ok(verdict);
        }

        self.reporter.report(&Event::Telemetry(TelemetryLine {
            magnitude: features.amplified_magnitude(&config),
            tilt_degrees: features.tilt_degrees,
            derived_voltage: features.derived_voltage,
        }));
        self.timer.delay_ms(config.sample_period_ms);
        Ok(verdict)
    }

    /// Runs detection cycles until the sample source fails for good.
    ///
    pub fn run(mut self) -> Result<Infallible, MonitorError> {
        loop {
            self.cycle()?;
        }
    }
}

/// Reads one sample, applying the configured policy on failure. The end of a recorded stream is
/// never retried.
///
pub fn read_with_policy<S, D>(source: &mut S, delay: &mut D, policy: &ReadPolicy) -> Result<Sample, SensorReadError>
where
    S: SampleSource,
    D: DelayNs,
{
    match source.read_sample() {
        Ok(sample) => Ok(sample),
        Err(SensorReadError::EndOfStream) => Err(SensorReadError::EndOfStream),
        Err(err) => match *policy {
            ReadPolicy::Halt => Err(err),
            ReadPolicy::Retry { attempts, backoff_ms } => {
                let mut last = err;
                for attempt in 1..=attempts {
                    log::warn!("Sensor read failed ({}), retry {} of {}", last, attempt, attempts);
                    delay.delay_ms(backoff_ms);
                    match source.read_sample() {
                        Ok(sample) => return Ok(sample),
                        Err(SensorReadError::EndOfStream) => return Err(SensorReadError::EndOfStream),
                        Err(err) => last = err,
                    }
                }
                log::error!("Sensor read failed after {} retries: {}", attempts, last);
                Err(last)
            }
        },
    }
}
