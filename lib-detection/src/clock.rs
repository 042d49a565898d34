use embedded_hal::delay::DelayNs;

/// Monotonic millisecond time source used for the grace window and cooldown bookkeeping.
///
pub trait Clock
{
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C
{
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for &mut C
{
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Virtual clock in which time only moves when somebody sleeps on it (or calls `advance`). This
/// lets the whole detection loop run deterministically on a host, the blocking delays of the
/// device become plain additions.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedClock
{
    /// In nanoseconds since the simulation started.
    now_ns: u64,
}

impl SimulatedClock
{
    pub const fn new() -> Self {
        SimulatedClock { now_ns: 0 }
    }

    pub const fn starting_at(ms: u64) -> Self {
        SimulatedClock { now_ns: ms * 1_000_000 }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ns += ms * 1_000_000;
    }
}

impl Clock for SimulatedClock
{
    fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }
}

impl DelayNs for SimulatedClock
{
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += ns as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.now_ns += us as u64 * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64);
    }
}
