use super::Sensor;
use serde::{Deserialize, Serialize};
use vdaq_api::sensor::{Pressure, PressureUnit};

/// Wiring and calibration constants for the brake line pressure transducer.
///
/// The stock values encode the deployed hardware: a 12 bit ADC referenced at
/// 3.3 V, fed through a 2:1 resistive divider, reading a transducer with a
/// 0.5 V to 4.5 V output span over 0 to 500 PSI. The fit constants are the
/// inversion of that span. A different divider or reference voltage needs the
/// fit re-derived from the transducer datasheet, not just a `v_ref` edit.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Calibration {
    /// ADC reference voltage in volts.
    pub v_ref: f32,
    /// Ratio of the resistive divider between the sensor output and the ADC input.
    pub divider_ratio: f32,
    /// Full scale ADC code.
    pub adc_max: u32,
    /// Slope of the voltage to pressure fit in PSI per volt.
    pub slope: f32,
    /// Offset of the voltage to pressure fit in PSI.
    pub offset: f32,
    /// Lower bound of the physical validity band in PSI.
    pub psi_min: f32,
    /// Upper bound of the physical validity band in PSI.
    pub psi_max: f32,
}

impl Calibration {
    /// Constants of the deployed transducer wiring and its documented fit.
    pub const STOCK: Self = Self {
        v_ref: 3.3,
        divider_ratio: 2.0,
        adc_max: 4095,
        slope: 125.0,
        offset: 62.5,
        psi_min: 0.0,
        psi_max: 500.0,
    };
}

impl Default for Calibration {
    fn default() -> Self {
        Self::STOCK
    }
}

/// Converts raw brake transducer ADC codes into PSI readings.
pub struct BrakeTransducer {
    cal: Calibration,
}

impl BrakeTransducer {
    /// Creates a converter with the stock calibration.
    pub fn new() -> Self {
        let sensor = Self {
            cal: Calibration::STOCK,
        };

        return sensor;
    }

    /// Creates a converter with a re-derived calibration.
    ///
    /// # Arguments
    /// * `cal` - Calibration to close over, typically read from the deployment config.
    pub fn with_calibration(cal: Calibration) -> Self {
        Self { cal }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.cal
    }

    /// Converts a raw ADC code to brake line pressure in PSI.
    ///
    /// Reconstructs the sensor side voltage from the code and applies the
    /// linear fit, clamping the result to the physical validity band. Total
    /// over all of `u32`: a code above full scale produces the clamped maximum,
    /// never an unbounded value, so a caller that does not check
    /// [`Self::raw_in_range`] still gets a safe reading.
    pub fn convert(&self, raw: u32) -> f32 {
        let v_sensor =
            (raw as f32 * self.cal.v_ref * self.cal.divider_ratio) / self.cal.adc_max as f32;
        let mut psi = (self.cal.slope * v_sensor) - self.cal.offset;

        if psi < self.cal.psi_min {
            psi = self.cal.psi_min;
        }
        if psi > self.cal.psi_max {
            psi = self.cal.psi_max;
        }

        psi
    }

    /// Returns true if `raw` is within the nominal resolution of the ADC.
    ///
    /// A code above full scale still converts to a clamped reading; callers
    /// that want to report the condition separately from a normal clamp can
    /// test it here.
    pub fn raw_in_range(&self, raw: u32) -> bool {
        raw <= self.cal.adc_max
    }
}

impl Sensor for BrakeTransducer {
    type Output = Pressure;

    fn conversion(&self, raw: u32) -> Pressure {
        return Pressure {
            pressure: self.convert(raw),
            unit: PressureUnit::Psi,
        };
    }
}
