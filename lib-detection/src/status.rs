/// "Double flow" status animation: two lit channels, `gap` apart, walk across a row of LEDs.
/// The pattern is a pure function of the step number, whoever drives the LEDs only needs to
/// count steps. It never looks at detection state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPattern
{
    pub channels: usize,

    /// Distance between the two lit channels.
    pub gap: usize,

    /// PWM duty of a lit channel, out of `u16::MAX`.
    pub duty: u16,

    /// In milliseconds; how long each step is shown.
    pub step_ms: u32,
}

impl FlowPattern
{
    pub const DEFAULT: FlowPattern = FlowPattern {
        channels: 6,
        gap: 1,
        duty: 40000,
        step_ms: 100,
    };

    /// Duty of `channel` during `step`.
    ///
    pub fn duty(&self, step: usize, channel: usize) -> u16 {
        if self.channels == 0 || channel >= self.channels {
            return 0;
        }
        let first = step % self.channels;
        let second = (first + self.gap) % self.channels;
        if channel == first || channel == second { self.duty } else { 0 }
    }

    /// Duties of all channels during `step`, in channel order.
    ///
    pub fn frame(&self, step: usize) -> impl Iterator<Item = u16> + '_ {
        (0..self.channels).map(move |channel| self.duty(step, channel))
    }

    /// Is the channel on at all during `step`? For drivers without PWM.
    pub fn is_lit(&self, step: usize, channel: usize) -> bool {
        self.duty(step, channel) > 0
    }
}

impl Default for FlowPattern {
    fn default() -> Self {
        Self::DEFAULT
    }
}
