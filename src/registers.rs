//! LIS3MDL register map and control-register packing.
//!
//! Addresses from datasheet section 7. The packing functions implement the
//! read-modify-write policy used at init: clear only the field owned by a
//! setting, OR in the new encoding, leave every other bit as the device had
//! it. They are pure `(old, setting) -> new` so the bit logic is testable
//! without bus traffic.

use crate::config::{FullScale, OperationMode, OutputDataRate};

/// Identity register. Reads [`DEVICE_ID`] on a live part.
pub const WHO_AM_I: u8 = 0x0F;
/// Expected WHO_AM_I value.
pub const DEVICE_ID: u8 = 0x3D;

pub const CTRL_REG1: u8 = 0x20;
pub const CTRL_REG2: u8 = 0x21;
pub const CTRL_REG3: u8 = 0x22;
pub const CTRL_REG4: u8 = 0x23;
pub const CTRL_REG5: u8 = 0x24;

pub const STATUS_REG: u8 = 0x27;

/// Output registers, low byte first per axis; the device auto-increments
/// through OUT_X_L..OUT_Z_H on a burst read.
pub const OUT_X_L: u8 = 0x28;
pub const OUT_X_H: u8 = 0x29;
pub const OUT_Y_L: u8 = 0x2A;
pub const OUT_Y_H: u8 = 0x2B;
pub const OUT_Z_L: u8 = 0x2C;
pub const OUT_Z_H: u8 = 0x2D;

pub const TEMP_OUT_L: u8 = 0x2E;
pub const TEMP_OUT_H: u8 = 0x2F;

pub const INT_CFG: u8 = 0x30;
pub const INT_SRC: u8 = 0x31;
pub const INT_THS_L: u8 = 0x32;
pub const INT_THS_H: u8 = 0x33;

/// STATUS_REG bit: new X/Y/Z data available.
pub const STATUS_ZYXDA: u8 = 0x08;

/// CTRL_REG1 bit: temperature sensor enable.
pub const TEMP_EN: u8 = 0x80;

// Field masks owned by init, one per register it touches.
const CTRL_REG1_FIELD: u8 = 0xFE;
const CTRL_REG2_FIELD: u8 = 0x60;
const CTRL_REG3_FIELD: u8 = 0x03;
const CTRL_REG4_FIELD: u8 = 0x0C;
const CTRL_REG5_FIELD: u8 = 0xC0;
const INT_CFG_FIELD: u8 = 0xFF;

/// TEMP_EN, X/Y operating mode and output data rate.
pub(crate) fn pack_ctrl_reg1(old: u8, mode: OperationMode, odr: OutputDataRate) -> u8 {
    (old & !CTRL_REG1_FIELD) | TEMP_EN | ((mode as u8) << 5) | odr as u8
}

/// Full-scale range.
pub(crate) fn pack_ctrl_reg2(old: u8, scale: FullScale) -> u8 {
    (old & !CTRL_REG2_FIELD) | scale as u8
}

/// Continuous-conversion mode (MD field cleared).
pub(crate) fn pack_ctrl_reg3(old: u8) -> u8 {
    old & !CTRL_REG3_FIELD
}

/// Z-axis operating mode, mirroring the X/Y selection.
pub(crate) fn pack_ctrl_reg4(old: u8, mode: OperationMode) -> u8 {
    (old & !CTRL_REG4_FIELD) | ((mode as u8) << 2)
}

/// Fast-read and block-data-update cleared.
pub(crate) fn pack_ctrl_reg5(old: u8) -> u8 {
    old & !CTRL_REG5_FIELD
}

/// All interrupt sources disabled.
pub(crate) fn pack_int_cfg(old: u8) -> u8 {
    old & !INT_CFG_FIELD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_reg1_encodes_mode_and_odr() {
        let v = pack_ctrl_reg1(0x00, OperationMode::HighPerformance, OutputDataRate::Hz40);
        assert_eq!(v, TEMP_EN | 0x40 | 0x18);
    }

    #[test]
    fn ctrl_reg1_preserves_bits_outside_field() {
        // Bit 0 (ST) is the only bit init does not own in CTRL_REG1.
        let v = pack_ctrl_reg1(0xFF, OperationMode::LowPower, OutputDataRate::Hz0_625);
        assert_eq!(v & 0x01, 0x01);
        assert_eq!(v, 0x01 | TEMP_EN);
    }

    #[test]
    fn ctrl_reg2_touches_only_fs_bits() {
        // 0x9C has REBOOT/SOFT_RST-adjacent and reserved bits set.
        let v = pack_ctrl_reg2(0x9C, FullScale::Fs16Gauss);
        assert_eq!(v, 0x9C | 0x60);
        assert_eq!(pack_ctrl_reg2(0x60, FullScale::Fs4Gauss), 0x00);
    }

    #[test]
    fn ctrl_reg3_clears_mode_field_only() {
        assert_eq!(pack_ctrl_reg3(0xFF), 0xFC);
        assert_eq!(pack_ctrl_reg3(0x03), 0x00);
    }

    #[test]
    fn ctrl_reg4_mirrors_operation_mode() {
        assert_eq!(
            pack_ctrl_reg4(0x00, OperationMode::UltraHighPerformance),
            0x0C
        );
        assert_eq!(pack_ctrl_reg4(0xF3, OperationMode::LowPower), 0xF3);
    }

    #[test]
    fn ctrl_reg5_and_int_cfg_clear_their_fields() {
        assert_eq!(pack_ctrl_reg5(0xFF), 0x3F);
        assert_eq!(pack_int_cfg(0xFF), 0x00);
    }
}
