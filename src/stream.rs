use std::io;

/// A pull source of whole bytes.
pub trait ByteSource {
    /// Returns the next byte. What happens when there is none is up to the
    /// source; the ones in this crate fail with `UnexpectedEof`.
    fn next_byte(&mut self) -> io::Result<u8>;

    /// Whether the source has no further bytes to offer. Takes `&mut self`
    /// since stream-backed sources have to peek to find out.
    fn is_exhausted(&mut self) -> bool;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> io::Result<u8> {
        (**self).next_byte()
    }

    fn is_exhausted(&mut self) -> bool {
        (**self).is_exhausted()
    }
}

pub trait Reader {
    /// read the next `count` bits, most significant first, or `None` if they
    /// can't be produced
    fn read(&mut self, count: u8) -> Option<u64>;
}
