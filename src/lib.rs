//! LIS3MDL 3-axis magnetometer I2C driver.
//!
//! Register-level driver for the ST LIS3MDL, built on the blocking
//! `embedded-hal` 1.0 [`I2c`](embedded_hal::i2c::I2c) trait. Based on the
//! LIS3MDL datasheet:
//! - I2C addresses: 0x1C (SDO/SA1 low) or 0x1E (SDO/SA1 high), 7-bit.
//! - Initialization: probe, verify chip ID, then configure operating mode,
//!   output data rate, full scale and continuous conversion via
//!   read-modify-write of CTRL_REG1..CTRL_REG5 and INT_CFG.
//! - Raw data: 16-bit two's complement, LSB at lower address.
//! - Sensitivity: 6842 LSB/gauss at ±4 gauss down to 1711 LSB/gauss at ±16.
//!
//! Usage notes:
//! - The bus is passed `&mut` into every call and never stored, so one I2C
//!   peripheral can serve several devices at different addresses. Serializing
//!   access between callers is the owner's job; each driver call may issue
//!   several bus transactions that must not be interleaved.
//! - Timeouts belong to the HAL I2C implementation, not to this crate.
//! - A [`Lis3mdl`] handle only exists after [`Lis3mdl::init`] succeeded, so a
//!   configured full-scale range is always in place before the first reading.
//!
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(mut i2c: I2C) -> Result<(), lis3mdl::Error<I2C::Error>> {
//! use lis3mdl::{DeviceAddress, FullScale, Lis3mdl, OperationMode, OutputDataRate};
//!
//! let mut mag = Lis3mdl::init(
//!     &mut i2c,
//!     DeviceAddress::SdoLow,
//!     FullScale::Fs4Gauss,
//!     OperationMode::HighPerformance,
//!     OutputDataRate::Hz40,
//! )?;
//! let [x, y, z] = mag.read_field(&mut i2c)?;
//! let temp_c = mag.read_temperature(&mut i2c)?;
//! # let _ = (x, y, z, temp_c);
//! # Ok(()) }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod registers;
pub mod transport;

mod driver;

pub use config::{DeviceAddress, FullScale, OperationMode, OutputDataRate};
pub use driver::Lis3mdl;

/// Driver errors, generic over the bus error type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A bus transmit or receive failed or timed out.
    Transport(E),
    /// No acknowledgment from the probed address.
    DeviceNotFound,
    /// WHO_AM_I returned something other than the chip ID, with the value read.
    UnexpectedIdentity(u8),
    /// Block write payload exceeds the transport frame capacity.
    BlockTooLarge,
}
