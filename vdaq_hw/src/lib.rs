//! Hardware facing crate of the vehicle data acquisition unit: sensor
//! conversions and the deployment calibration that drives them.

pub mod config;
pub mod sensor;
