use std::collections::VecDeque;

use crate::*;

mod bridge;
mod config;
mod status;

/// Sample source that plays back a script and then keeps repeating a fallback sample, or reports
/// the end of the stream when there is none.
///
pub struct ScriptedSource
{
    script: VecDeque<Result<Sample, SensorReadError>>,
    fallback: Option<Sample>,
    pub reads: usize,
}

impl ScriptedSource
{
    pub fn new(script: Vec<Result<Sample, SensorReadError>>, fallback: Option<Sample>) -> Self {
        ScriptedSource { script: script.into(), fallback, reads: 0 }
    }

    pub fn repeating(sample: Sample) -> Self {
        Self::new(Vec::new(), Some(sample))
    }
}

impl SampleSource for ScriptedSource
{
    fn read_sample(&mut self) -> Result<Sample, SensorReadError> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(result) => result,
            None => self.fallback.ok_or(SensorReadError::EndOfStream),
        }
    }
}

#[derive(Default)]
pub struct Recorder
{
    pub events: Vec<Event>,
}

impl Reporter for Recorder
{
    fn report(&mut self, event: &Event) {
        self.events.push(*event);
    }
}

pub const REST: Vector = Vector::new(0.0, 0.0, 1.0);

pub fn features(magnitude: f32, tilt_degrees: f32, derived_voltage: f32) -> Features {
    Features { linear_magnitude: magnitude, tilt_degrees, derived_voltage }
}
