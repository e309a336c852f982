//! LIS3MDL sensor controller.
//!
//! Owns the configured address and full-scale range and keeps the most recent
//! readings, raw counts alongside converted units. Register-level traffic
//! goes through [`crate::transport`]; bit packing lives in
//! [`crate::registers`].

use embedded_hal::i2c::I2c;

use crate::config::{DeviceAddress, FullScale, OperationMode, OutputDataRate};
use crate::registers;
use crate::transport;
use crate::Error;

/// Divisor turning a raw temperature count into degrees Celsius.
const TEMP_LSB_PER_DEG_C: f32 = 8.0;

/// A configured LIS3MDL. Only obtainable through [`Lis3mdl::init`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lis3mdl {
    address: u8,
    full_scale: FullScale,
    field_raw: [i16; 3],
    field: [f32; 3],
    temperature_raw: i16,
    temperature: f32,
}

impl Lis3mdl {
    /// Probe, identify and configure the device, returning the handle.
    ///
    /// Fails with [`Error::DeviceNotFound`] if nothing acknowledges at the
    /// selected address and with [`Error::UnexpectedIdentity`] if WHO_AM_I
    /// does not read 0x3D; no control register is written in either case.
    /// Each control register is read-modify-written so bits outside the
    /// fields owned here keep whatever the device had in them. A transport
    /// failure partway through leaves earlier writes applied; re-run `init`
    /// to reach a known configuration.
    pub fn init<I2C: I2c>(
        i2c: &mut I2C,
        device: DeviceAddress,
        scale: FullScale,
        mode: OperationMode,
        odr: OutputDataRate,
    ) -> Result<Self, Error<I2C::Error>> {
        let addr = device.addr();

        if !transport::probe(i2c, addr) {
            return Err(Error::DeviceNotFound);
        }

        let id = transport::read_byte(i2c, addr, registers::WHO_AM_I)?;
        if id != registers::DEVICE_ID {
            return Err(Error::UnexpectedIdentity(id));
        }

        let old = transport::read_byte(i2c, addr, registers::CTRL_REG1)?;
        transport::write_byte(
            i2c,
            addr,
            registers::CTRL_REG1,
            registers::pack_ctrl_reg1(old, mode, odr),
        )?;

        let old = transport::read_byte(i2c, addr, registers::CTRL_REG2)?;
        transport::write_byte(
            i2c,
            addr,
            registers::CTRL_REG2,
            registers::pack_ctrl_reg2(old, scale),
        )?;

        let old = transport::read_byte(i2c, addr, registers::CTRL_REG3)?;
        transport::write_byte(
            i2c,
            addr,
            registers::CTRL_REG3,
            registers::pack_ctrl_reg3(old),
        )?;

        let old = transport::read_byte(i2c, addr, registers::CTRL_REG4)?;
        transport::write_byte(
            i2c,
            addr,
            registers::CTRL_REG4,
            registers::pack_ctrl_reg4(old, mode),
        )?;

        let old = transport::read_byte(i2c, addr, registers::CTRL_REG5)?;
        transport::write_byte(
            i2c,
            addr,
            registers::CTRL_REG5,
            registers::pack_ctrl_reg5(old),
        )?;

        let old = transport::read_byte(i2c, addr, registers::INT_CFG)?;
        transport::write_byte(i2c, addr, registers::INT_CFG, registers::pack_int_cfg(old))?;

        Ok(Self {
            address: addr,
            full_scale: scale,
            field_raw: [0; 3],
            field: [0.0; 3],
            temperature_raw: 0,
            temperature: 0.0,
        })
    }

    /// Burst-read the six output registers and convert to gauss.
    ///
    /// Returns `[x, y, z]` and stores raw and converted values in the handle.
    /// On a transport failure the stored values stay as they were.
    pub fn read_field<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<[f32; 3], Error<I2C::Error>> {
        let mut buf = [0u8; 6];
        transport::read_block(i2c, self.address, registers::OUT_X_L, &mut buf)?;

        // Low byte first per axis, X then Y then Z.
        let raw = [
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ];
        let sensitivity = self.full_scale.sensitivity();

        self.field_raw = raw;
        for (axis, &count) in raw.iter().enumerate() {
            self.field[axis] = count as f32 / sensitivity;
        }
        Ok(self.field)
    }

    /// Read the internal temperature sensor, in degrees Celsius.
    ///
    /// Same commit discipline as [`read_field`](Self::read_field): nothing in
    /// the handle changes unless the bus read succeeded.
    pub fn read_temperature<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<f32, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        transport::read_block(i2c, self.address, registers::TEMP_OUT_L, &mut buf)?;

        self.temperature_raw = i16::from_le_bytes(buf);
        self.temperature = self.temperature_raw as f32 / TEMP_LSB_PER_DEG_C;
        Ok(self.temperature)
    }

    /// Read STATUS_REG.
    pub fn status<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<u8, Error<I2C::Error>> {
        transport::read_byte(i2c, self.address, registers::STATUS_REG)
    }

    /// Whether a new X/Y/Z sample is available (STATUS_REG ZYXDA).
    pub fn data_ready<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status(i2c)? & registers::STATUS_ZYXDA != 0)
    }

    /// Seven-bit bus address this handle talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Full-scale range configured at init.
    pub fn full_scale(&self) -> FullScale {
        self.full_scale
    }

    /// Last field reading in gauss, `[x, y, z]`.
    pub fn field(&self) -> [f32; 3] {
        self.field
    }

    /// Last field reading in raw counts, `[x, y, z]`.
    pub fn field_raw(&self) -> [i16; 3] {
        self.field_raw
    }

    /// Last temperature reading in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Last temperature reading in raw counts.
    pub fn temperature_raw(&self) -> i16 {
        self.temperature_raw
    }
}
