use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {requested} bits at once, supported range is {min}..={max}")]
    BitCount {
        requested: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid digit {digit:?} at position {position} in bit string")]
    InvalidDigit {
        digit: char,
        position: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True if the underlying byte source ran out of data.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
