//! Bit-granular reads over any byte source.
//!
//! Bits are taken most significant first within each byte, and a request that
//! spans several bytes puts the earlier bits in the higher positions of the
//! result. At most one byte of residue is held between calls.

use std::cmp::min;

use log::{debug, trace};

pub mod bit_repr;
pub mod bit_string_source;
pub mod error;
pub mod iter_source;
pub mod read_source;
pub mod slice_source;
pub mod stream;

pub use bit_repr::count_leading_zeros;
pub use error::{Error, Result};
pub use stream::*;

/// Widest unsigned read.
pub const MAX_UNSIGNED_BITS: u32 = 64;

/// Widest signed read. Sign extension happens in a 32-bit frame, so anything
/// wider would come back with the wrong sign.
pub const MAX_SIGNED_BITS: u32 = 32;

pub struct BitReader<'a, S: ByteSource + ?Sized> {
    source: &'a mut S,
    buffer: u8, // unconsumed bits, right-aligned
    length: u8, // number of them, 0..=8
}

impl<'a, S: ByteSource + ?Sized> BitReader<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        BitReader {
            source,
            buffer: 0,
            length: 0,
        }
    }

    /// No residual bits left and nothing more in the source. This is advisory:
    /// a source that only discovers its end while fetching can still fail the
    /// next read.
    pub fn at_end(&mut self) -> bool {
        if self.length > 0 {
            return false;
        }
        self.source.is_exhausted()
    }

    pub fn read_unsigned(&mut self, bit_count: u32) -> Result<u64> {
        check(bit_count, 0, MAX_UNSIGNED_BITS)?;

        let mut remaining = bit_count;
        let mut res = 0u64;
        while remaining > 0 {
            if self.length == 0 {
                self.fetch()?;
            }

            let n = min(self.length as u32, remaining);
            let top = self.buffer >> (self.length as u32 - n);
            res = res << n | top as u64;
            self.length -= n as u8;
            self.buffer &= ((1u16 << self.length) - 1) as u8;
            remaining -= n;
        }

        Ok(res)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_unsigned(8)? as u8)
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_unsigned(1)? != 0)
    }

    /// Reads `bit_count` bits as a two's complement integer of that width.
    /// Only `1..=32` bits are supported.
    pub fn read_signed(&mut self, bit_count: u32) -> Result<i64> {
        check(bit_count, 1, MAX_SIGNED_BITS)?;

        let raw = self.read_unsigned(bit_count)? as u32;
        let shift = 32 - bit_count;
        Ok(((raw << shift) as i32 >> shift) as i64)
    }

    /// Drops the rest of a partially read byte so the next read starts on the
    /// following byte boundary of the source.
    pub fn align(&mut self) {
        let dropped = self.length % 8;
        if dropped > 0 {
            debug!("aligning, discarding {} residual bits", dropped);
        }
        self.length -= dropped;
        self.buffer &= ((1u16 << self.length) - 1) as u8;
    }

    pub fn is_aligned(&self) -> bool {
        self.length % 8 == 0
    }

    /// Bits fetched from the source but not handed out yet.
    pub fn residual_bits(&self) -> u32 {
        self.length as u32
    }

    fn fetch(&mut self) -> Result<()> {
        self.buffer = self.source.next_byte()?;
        self.length = 8;
        trace!("fetched byte {:#010b}", self.buffer);
        Ok(())
    }
}

/// `None` covers every failure: a bit count over 64, the source running dry
/// and any other I/O error alike. Unlike a length-checked `Reader`, a request
/// that runs past the end of the source has already used up whatever bits
/// were buffered by the time it returns `None`, so the stream can't be
/// resumed from where it was.
impl<'a, S: ByteSource + ?Sized> Reader for BitReader<'a, S> {
    fn read(&mut self, count: u8) -> Option<u64> {
        self.read_unsigned(count as u32).ok()
    }
}

fn check(bit_count: u32, min: u32, max: u32) -> Result<()> {
    if bit_count < min || bit_count > max {
        debug!("rejecting read of {} bits, allowed {}..={}", bit_count, min, max);
        return Err(Error::BitCount {
            requested: bit_count,
            min,
            max,
        });
    }
    Ok(())
}
