//! Status animation on the row of LEDs next to the sensor. It is driven entirely from a timer
//! interrupt so the blocking detection loop (and its long cooldown pauses) never stalls it, and it
//! never reads anything from the detector.
//!
//! The LEDs are plain GPIO outputs, a lit channel is simply driven high.
//!
use core::cell::{Cell, RefCell};
use critical_section::Mutex;
use detection::FlowPattern;
use esp_hal::prelude::*;
use esp_hal::{
    gpio::Output,
    interrupt::{self, Priority},
    peripherals::{Interrupt, TIMG1},
    timer::timg::{Timer, Timer0, TimerGroup},
    Blocking
};
use crate::Global;

const PATTERN: FlowPattern = FlowPattern::DEFAULT;

pub const LED_COUNT: usize = PATTERN.channels;

/// Timer used for periodic interrupts in which the animation moves one step.
static TIMER0: Global<Timer<Timer0<TIMG1>, Blocking>> = Mutex::new(RefCell::new(None));

static LEDS: Global<[Output<'static>; LED_COUNT]> = Mutex::new(RefCell::new(None));

static STEP: Mutex<Cell<usize>> = Mutex::new(Cell::new(0));

/// Setup the timer interrupt and start animating the given LEDs.
///
pub fn setup(leds: [Output<'static>; LED_COUNT], timer_group: TIMG1) {
    let timers = TimerGroup::new(timer_group);
    let timer0 = timers.timer0;
    timer0.set_interrupt_handler(on_timer_interrupt);

    if let Err(err) = interrupt::enable(Interrupt::TG1_T0_LEVEL, Priority::Priority1) {
        log::warn!("Status LEDs disabled, could not enable timer interrupt: {:?}", err);
        return;
    }
    if let Err(err) = timer0.load_value((PATTERN.step_ms as u64).millis()) {
        log::warn!("Status LEDs disabled, could not load timer: {:?}", err);
        return;
    }

    critical_section::with(|cs| {
        LEDS.borrow_ref_mut(cs).replace(leds);
        TIMER0.borrow_ref_mut(cs).replace(timer0);
        if let Some(timer0) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer0.start();
            timer0.listen();
        }
    });
}

#[handler]
fn on_timer_interrupt() {
    critical_section::with(|cs| {

        let mut timer0 = TIMER0.borrow_ref_mut(cs);
        if let Some(timer0) = timer0.as_mut() {

            timer0.clear_interrupt();

            let step = STEP.borrow(cs).get();
            STEP.borrow(cs).set(step.wrapping_add(1));

            let mut leds = LEDS.borrow_ref_mut(cs);
            if let Some(leds) = leds.as_mut() {
                for (channel, led) in leds.iter_mut().enumerate() {
                    led.set_level(PATTERN.is_lit(step, channel).into());
                }
            }

            if timer0.load_value((PATTERN.step_ms as u64).millis()).is_ok() {
                timer0.start();
            }
        }
    });
}
