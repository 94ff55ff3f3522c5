mod brake_trans;
pub use brake_trans::{BrakeTransducer, Calibration};

/// Sensor specific transformation from a raw ADC code to a physical reading.
pub trait Sensor {
    type Output;

    fn conversion(&self, raw: u32) -> Self::Output;
}
