//! Configuration options for the control registers.
//!
//! Discriminants are the exact bit patterns the device expects, positioned as
//! they appear in their register fields (datasheet section 8).

/// I2C device address, selected by the SDO/SA1 pad level.
///
/// Values are 7-bit addresses as consumed by `embedded_hal::i2c` — the bus
/// implementation shifts in the R/W bit itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceAddress {
    /// SDO/SA1 tied low: 0x1C.
    SdoLow = 0x1C,
    /// SDO/SA1 tied high: 0x1E.
    SdoHigh = 0x1E,
}

impl DeviceAddress {
    /// Seven-bit bus address.
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// Full-scale measurement range (CTRL_REG2 FS field).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FullScale {
    /// ±4 gauss.
    Fs4Gauss = 0x00,
    /// ±8 gauss.
    Fs8Gauss = 0x20,
    /// ±12 gauss.
    Fs12Gauss = 0x40,
    /// ±16 gauss.
    Fs16Gauss = 0x60,
}

impl FullScale {
    /// Sensitivity for this range, in LSB per gauss (datasheet table 3).
    pub fn sensitivity(self) -> f32 {
        match self {
            FullScale::Fs4Gauss => 6842.0,
            FullScale::Fs8Gauss => 3421.0,
            FullScale::Fs12Gauss => 2281.0,
            FullScale::Fs16Gauss => 1711.0,
        }
    }
}

/// X/Y-axis operating mode (CTRL_REG1 OM field, pre-shift).
///
/// Init mirrors the same selection into the Z-axis field of CTRL_REG4.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OperationMode {
    /// Low-power mode.
    LowPower = 0x00,
    /// Medium-performance mode.
    MediumPerformance = 0x01,
    /// High-performance mode.
    HighPerformance = 0x02,
    /// Ultra-high-performance mode.
    UltraHighPerformance = 0x03,
}

/// Output data rate (CTRL_REG1 DO field).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputDataRate {
    /// 0.625 Hz.
    Hz0_625 = 0x00,
    /// 1.25 Hz.
    Hz1_25 = 0x04,
    /// 2.5 Hz.
    Hz2_5 = 0x08,
    /// 5 Hz.
    Hz5 = 0x0C,
    /// 10 Hz.
    Hz10 = 0x10,
    /// 20 Hz.
    Hz20 = 0x14,
    /// 40 Hz.
    Hz40 = 0x18,
    /// 80 Hz.
    Hz80 = 0x1C,
    /// FAST_ODR: the rate depends on the operating mode —
    /// 1000 Hz low-power, 560 Hz medium, 300 Hz high, 155 Hz ultra-high.
    Fast = 0x02,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_match_pad_levels() {
        assert_eq!(DeviceAddress::SdoLow.addr(), 0x1C);
        assert_eq!(DeviceAddress::SdoHigh.addr(), 0x1E);
    }

    #[test]
    fn full_scale_bits_and_sensitivity() {
        assert_eq!(FullScale::Fs4Gauss as u8, 0x00);
        assert_eq!(FullScale::Fs8Gauss as u8, 0x20);
        assert_eq!(FullScale::Fs12Gauss as u8, 0x40);
        assert_eq!(FullScale::Fs16Gauss as u8, 0x60);

        assert_eq!(FullScale::Fs4Gauss.sensitivity(), 6842.0);
        assert_eq!(FullScale::Fs8Gauss.sensitivity(), 3421.0);
        assert_eq!(FullScale::Fs12Gauss.sensitivity(), 2281.0);
        assert_eq!(FullScale::Fs16Gauss.sensitivity(), 1711.0);
    }

    #[test]
    fn odr_codes() {
        assert_eq!(OutputDataRate::Hz0_625 as u8, 0x00);
        assert_eq!(OutputDataRate::Hz10 as u8, 0x10);
        assert_eq!(OutputDataRate::Hz80 as u8, 0x1C);
        assert_eq!(OutputDataRate::Fast as u8, 0x02);
    }
}
