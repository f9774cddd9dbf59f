use std::io::{self, BufRead};

use log::debug;

pub use crate::stream::ByteSource;

/// Bytes pulled one at a time out of a buffered reader. Wrap plain `Read`
/// types in a `std::io::BufReader` first.
pub struct ReadSource<R> {
    inner: R,
}

impl<R: BufRead> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> io::Result<u8> {
        loop {
            let first = match self.inner.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            return match first {
                Some(byte) => {
                    self.inner.consume(1);
                    Ok(byte)
                }
                None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "reader exhausted")),
            };
        }
    }

    fn is_exhausted(&mut self) -> bool {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return buf.is_empty(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // leave it to the next read to report
                    debug!("peek failed while checking for end of input: {e}");
                    return false;
                }
            }
        }
    }
}
