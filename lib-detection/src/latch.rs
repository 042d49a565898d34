/// Makes sure a detected episode raises exactly one alert. Once raised the latch stays closed
/// until it is explicitly released after the cooldown.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertLatch
{
    alerting: bool,

    /// In milliseconds; when the current alert was raised.
    raised_at: u64,
}

impl AlertLatch
{
    pub const fn new() -> Self {
        AlertLatch { alerting: false, raised_at: 0 }
    }

    pub fn is_alerting(&self) -> bool {
        self.alerting
    }

    /// Raises the alert, returns `true` only for the call that actually raised it.
    ///
    pub fn raise(&mut self, now_ms: u64) -> bool {
        if self.alerting {
            return false;
        }
        self.alerting = true;
        self.raised_at = now_ms;
        true
    }

    /// Has the cooldown of the pending alert run out? Always `false` when nothing was raised.
    ///
    pub fn cooldown_elapsed(&self, now_ms: u64, cooldown_ms: u32) -> bool {
        self.alerting && now_ms.saturating_sub(self.raised_at) >= cooldown_ms as u64
    }

    pub fn release(&mut self) {
        *self = AlertLatch::new();
    }
}
