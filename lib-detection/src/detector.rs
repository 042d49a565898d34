use cfg_if::cfg_if;

use crate::{AlertLatch, DetectorConfig, Features};

/// Where the spike detector currently is in its cycle.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    /// Still inside the grace window after start-up or the last reset, spikes are not evaluated.
    Invincible,

    /// Every cycle is tested against the spike conjunction.
    Armed,

    /// An alert was raised and the cooldown has not completed yet.
    Alerting,
}

/// Outcome of a single [`SpikeDetector::update`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict
{
    /// Inside the grace window, nothing was evaluated or stored.
    Grace,

    /// First armed cycle, the magnitude was stored as the comparison point.
    Primed,

    /// The conjunction held, `count` is the current run of consecutive spikes.
    Spike { count: u32 },

    /// The conjunction failed and the run was reset.
    Calm,

    /// The conjunction held long enough, an alert was raised on this cycle.
    Alert,

    /// An alert is pending, the cycle was ignored.
    Cooling,
}

/// Long-lived detection state, owned by a single [`SpikeDetector`].
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorState
{
    previous_magnitude: Option<f32>,
    consecutive_count: u32,
    latch: AlertLatch,

    /// In milliseconds; start of the current grace window.
    window_start: u64,
}

impl DetectorState
{
    pub const fn new(window_start: u64) -> Self {
        DetectorState {
            previous_magnitude: None,
            consecutive_count: 0,
            latch: AlertLatch::new(),
            window_start,
        }
    }

    pub fn previous_magnitude(&self) -> Option<f32> {
        self.previous_magnitude
    }

    pub fn consecutive_count(&self) -> u32 {
        self.consecutive_count
    }

    pub fn alerting(&self) -> bool {
        self.latch.is_alerting()
    }

    pub fn window_start(&self) -> u64 {
        self.window_start
    }
}

/// Debounced spike detector. A cycle counts as a spike when the change in (amplified) magnitude,
/// the tilt and the derived voltage all exceed their thresholds; an alert needs
/// `required_spikes` of those back to back.
///
#[derive(Debug, Clone)]
pub struct SpikeDetector
{
    config: DetectorConfig,
    state: DetectorState,
}

impl SpikeDetector
{
    pub fn new(config: DetectorConfig, now_ms: u64) -> Self {
        SpikeDetector { config, state: DetectorState::new(now_ms) }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    pub fn phase(&self, now_ms: u64) -> Phase {
        if self.state.latch.is_alerting() {
            Phase::Alerting
        } else if self.grace_elapsed(now_ms) {
            Phase::Armed
        } else {
            Phase::Invincible
        }
    }

    fn grace_elapsed(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.state.window_start) > self.config.grace_ms
    }

    fn is_spike(&self, delta: f32, features: &Features) -> bool {
        delta > self.config.vibration_threshold
            && features.tilt_degrees > self.config.tilt_threshold
            && features.derived_voltage > self.config.voltage_threshold
    }

    /// Feeds one cycle worth of features into the detector.
    ///
    pub fn update(&mut self, features: &Features, now_ms: u64) -> Verdict {
        match self.phase(now_ms) {
            Phase::Alerting => return Verdict::Cooling,
            Phase::Invincible => return Verdict::Grace,
            Phase::Armed => {}
        }

        let magnitude = features.amplified_magnitude(&self.config);

        let verdict = match self.state.previous_magnitude {
            None => Verdict::Primed,
            Some(previous) => {
                let delta = libm::fabsf(magnitude - previous);

                cfg_if! { if #[cfg(feature = "debug")] {
                    log::trace!(
                        "delta={:.3} tilt={:.3} voltage={:.3}",
                        delta, features.tilt_degrees, features.derived_voltage
                    );
                }}

                if self.is_spike(delta, features) {
                    self.state.consecutive_count += 1;
                    let count = self.state.consecutive_count;
                    if count >= self.config.required_spikes && self.state.latch.raise(now_ms) {
                        log::info!("Alert raised after {} consecutive spikes", count);
                        Verdict::Alert
                    } else {
                        log::debug!("Spike {} of {}", count, self.config.required_spikes);
                        Verdict::Spike { count }
                    }
                } else {
                    self.state.consecutive_count = 0;
                    Verdict::Calm
                }
            }
        };

        self.state.previous_magnitude = Some(magnitude);
        verdict
    }

    /// Is there a pending alert whose cooldown has run out?
    ///
    pub fn cooldown_elapsed(&self, now_ms: u64) -> bool {
        self.state.latch.cooldown_elapsed(now_ms, self.config.cooldown_ms)
    }

    /// Non-blocking alternative to sleeping through the cooldown: resets the detector once the
    /// cooldown has elapsed and reports whether it did.
    ///
    pub fn poll_cooldown(&mut self, now_ms: u64) -> bool {
        if self.cooldown_elapsed(now_ms) {
            self.reset(now_ms);
            return true;
        }
        false
    }

    /// Ends the current episode: every piece of state goes back to its initial value and a new
    /// grace window starts at `now_ms`.
    ///
    pub fn reset(&mut self, now_ms: u64) {
        self.state = DetectorState::new(now_ms);
    }
}
