use math::Vector;

use crate::SensorReadError;

/// One instantaneous tri-axis accelerometer reading in g.
pub type Sample = Vector;

/// Anything that can hand out accelerometer readings on demand, typically the sensor driver.
/// Reading blocks until a sample is available.
///
pub trait SampleSource
{
    fn read_sample(&mut self) -> Result<Sample, SensorReadError>;
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S
{
    fn read_sample(&mut self) -> Result<Sample, SensorReadError> {
        (**self).read_sample()
    }
}
