pub mod sensor {
    use serde::{Deserialize, Serialize};
    use strum::Display;

    #[derive(Clone, Copy, Debug, Deserialize, Display, Serialize)]
    pub enum PressureUnit {
        Psi,
    }

    /// A calibrated pressure reading. Always within the physical validity
    /// band of the sensor that produced it.
    #[derive(Clone, Copy, Debug, Deserialize, Serialize)]
    pub struct Pressure {
        pub pressure: f32,
        pub unit: PressureUnit,
    }
}

pub mod can {
    use crate::sensor::Pressure;
    use serde::{Deserialize, Serialize};

    /// One transducer channel as handed to the CAN stack: the raw ADC code,
    /// the derived reading and the outgoing frame.
    ///
    /// A CAN frame carries up to 8 data bytes; the reading occupies the
    /// first 4 as a little endian f32 and the rest are left zeroed.
    #[derive(Clone, Copy, Debug, Deserialize, Serialize)]
    pub struct TransducerFrame {
        pub adc_raw: u32,
        pub pressure: Pressure,
        pub can_id: u32,
        pub can_data: [u8; 8],
    }

    impl TransducerFrame {
        /// Frame a converted reading for transmission.
        ///
        /// # Arguments
        /// * `adc_raw` - Code the reading was derived from.
        /// * `pressure` - Calibrated reading for this acquisition cycle.
        /// * `can_id` - Bus identifier of the transducer channel.
        pub fn new(adc_raw: u32, pressure: Pressure, can_id: u32) -> Self {
            let mut can_data = [0u8; 8];
            can_data[..4].copy_from_slice(&pressure.pressure.to_le_bytes());

            Self {
                adc_raw,
                pressure,
                can_id,
                can_data,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::can::TransducerFrame;
    use crate::sensor::{Pressure, PressureUnit};

    #[test]
    fn frame_packs_reading_into_leading_payload_bytes() {
        let pressure = Pressure {
            pressure: 250.0,
            unit: PressureUnit::Psi,
        };
        let frame = TransducerFrame::new(1551, pressure, 0x120);

        assert_eq!(frame.adc_raw, 1551);
        assert_eq!(frame.can_id, 0x120);
        assert_eq!(frame.can_data[..4], 250.0f32.to_le_bytes());
        assert_eq!(frame.can_data[4..], [0, 0, 0, 0]);
    }

    #[test]
    fn pressure_unit_displays_as_text() {
        assert_eq!(PressureUnit::Psi.to_string(), "Psi");
    }
}
