use std::io;
use std::iter::Peekable;

pub use crate::stream::ByteSource;

pub struct IterSource<I: Iterator<Item = u8>> {
    iter: Peekable<I>,
}

impl<I: Iterator<Item = u8>> IterSource<I> {
    pub fn new<T>(bytes: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        IterSource {
            iter: bytes.into_iter().peekable(),
        }
    }
}

impl<I: Iterator<Item = u8>> ByteSource for IterSource<I> {
    fn next_byte(&mut self) -> io::Result<u8> {
        self.iter
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "iterator exhausted"))
    }

    fn is_exhausted(&mut self) -> bool {
        self.iter.peek().is_none()
    }
}
