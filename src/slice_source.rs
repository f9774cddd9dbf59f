use std::io;

pub use crate::stream::ByteSource;

/// Bytes from a borrowed slice.
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SliceSource { data, position: 0 }
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

impl<'a> ByteSource for SliceSource<'a> {
    fn next_byte(&mut self) -> io::Result<u8> {
        match self.data.get(self.position) {
            Some(&byte) => {
                self.position += 1;
                Ok(byte)
            }
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "slice exhausted")),
        }
    }

    fn is_exhausted(&mut self) -> bool {
        self.position >= self.data.len()
    }
}
