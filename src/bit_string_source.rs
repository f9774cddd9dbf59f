//! A byte source built from a string of binary digits. Mostly for testing:
//! it lets a bit layout be written out the way it's read.

use std::collections::VecDeque;
use std::io;

pub use crate::stream::ByteSource;
use crate::error::{Error, Result};

pub struct BitStringSource {
    bytes: VecDeque<u8>,
    bit_len: usize,
}

impl BitStringSource {
    /// Packs `digits` MSB-first. Whitespace and `_` are skipped so layouts can
    /// be grouped, and a trailing partial byte is padded with zeros.
    pub fn new(digits: &str) -> Result<Self> {
        let mut bytes = VecDeque::new();
        let mut bit_len = 0;

        for (position, digit) in digits.chars().enumerate() {
            let bit: u8 = match digit {
                '0' => 0,
                '1' => 1,
                '_' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(Error::InvalidDigit { digit: c, position }),
            };

            if bit_len % 8 == 0 {
                bytes.push_back(0);
            }
            if let Some(last) = bytes.back_mut() {
                *last |= bit << (7 - bit_len % 8);
            }
            bit_len += 1;
        }

        Ok(BitStringSource { bytes, bit_len })
    }

    /// Number of digits in the string, before padding.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }
}

impl ByteSource for BitStringSource {
    fn next_byte(&mut self) -> io::Result<u8> {
        self.bytes
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "bit string exhausted"))
    }

    fn is_exhausted(&mut self) -> bool {
        self.bytes.is_empty()
    }
}
