//! Register-level I2C primitives.
//!
//! Four blocking operations against a 7-bit device address, plus a presence
//! probe. Reads are an address write followed by a data read, two sequential
//! bus operations; multi-byte reads rely on the device auto-incrementing its
//! register pointer. A single failure aborts and surfaces to the caller, no
//! retries at this layer.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::Error;

/// Largest payload a single block write can carry.
pub const MAX_BLOCK_WRITE: usize = 32;

/// Check whether a device acknowledges at `addr` (zero-length write).
pub fn probe<I2C: I2c>(i2c: &mut I2C, addr: u8) -> bool {
    i2c.write(addr, &[]).is_ok()
}

/// Write a single register.
pub fn write_byte<I2C: I2c>(
    i2c: &mut I2C,
    addr: u8,
    reg: u8,
    value: u8,
) -> Result<(), Error<I2C::Error>> {
    i2c.write(addr, &[reg, value]).map_err(Error::Transport)
}

/// Read a single register.
pub fn read_byte<I2C: I2c>(i2c: &mut I2C, addr: u8, reg: u8) -> Result<u8, Error<I2C::Error>> {
    let mut buf = [0u8; 1];
    i2c.write(addr, &[reg]).map_err(Error::Transport)?;
    i2c.read(addr, &mut buf).map_err(Error::Transport)?;
    Ok(buf[0])
}

/// Write `data` to consecutive registers starting at `reg`, as one frame.
///
/// Registers beyond the single-byte range get a two-byte big-endian address
/// prefix. The LIS3MDL register map never leaves the 8-bit range, but the
/// framing covers memory-style parts that do.
pub fn write_block<I2C: I2c>(
    i2c: &mut I2C,
    addr: u8,
    reg: u16,
    data: &[u8],
) -> Result<(), Error<I2C::Error>> {
    if data.len() > MAX_BLOCK_WRITE {
        return Err(Error::BlockTooLarge);
    }
    let mut frame: Vec<u8, { MAX_BLOCK_WRITE + 2 }> = Vec::new();
    if reg > 0xFF {
        frame
            .extend_from_slice(&reg.to_be_bytes())
            .map_err(|_| Error::BlockTooLarge)?;
    } else {
        frame.push(reg as u8).map_err(|_| Error::BlockTooLarge)?;
    }
    frame
        .extend_from_slice(data)
        .map_err(|_| Error::BlockTooLarge)?;
    i2c.write(addr, &frame).map_err(Error::Transport)
}

/// Read `buf.len()` bytes from consecutive registers starting at `reg`.
pub fn read_block<I2C: I2c>(
    i2c: &mut I2C,
    addr: u8,
    reg: u8,
    buf: &mut [u8],
) -> Result<(), Error<I2C::Error>> {
    i2c.write(addr, &[reg]).map_err(Error::Transport)?;
    i2c.read(addr, buf).map_err(Error::Transport)
}
