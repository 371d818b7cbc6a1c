use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A padder could not be created.
    #[error("couldn't create padder: {0}")]
    Construction(#[from] ConstructionError),
    /// Padding could not be removed.
    #[error("couldn't remove padding: {0}")]
    Unpad(#[from] UnpadError),
}

/// Errors raised while validating the parameters of a [`Padder`](crate::Padder).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("invalid block size {0}; must be between 1 and 255")]
    InvalidBlockSize(usize),
    #[error("invalid padding scheme {0}")]
    InvalidPaddingScheme(u8),
}

/// Errors raised by [`Padder::unpad`](crate::Padder::unpad).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnpadError {
    /// The length of the data is not a positive multiple of the block size, so it can't have
    /// been padded. The length is public, so this is reported before the padding is looked at.
    #[error("padded data length is not a multiple of the block size")]
    InvalidPaddedDataLength,
    /// The last block does not have the layout of the padding scheme.
    ///
    /// It is deliberately not stated what exactly is wrong, an attacker must not learn which
    /// check failed.
    #[error("invalid padding")]
    InvalidPadding,
}
