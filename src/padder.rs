use crate::error::{ConstructionError, UnpadError};
use crate::fillers;
use crate::registry::{self, Algorithm};
use crate::scheme::PaddingScheme;
use log::{debug, warn};
use std::fmt;

/// The largest supported block size. The pad length has to fit into one byte.
pub const MAX_BLOCK_SIZE: usize = u8::MAX as usize;

/// Pads data before it is encrypted with a block cipher and unpads it after decryption.
///
/// A `Padder` binds one [`PaddingScheme`] to one block size. It is never modified after
/// [`Padder::new`], so it can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Padder {
    scheme: PaddingScheme,
    block_size: usize,
}

impl Padder {
    /// Creates a padder for `scheme` and a block size between 1 and 255.
    pub fn new(scheme: PaddingScheme, block_size: usize) -> Result<Self, ConstructionError> {
        if !(1..=MAX_BLOCK_SIZE).contains(&block_size) {
            warn!("rejected block size {} for {} padding", block_size, scheme);
            return Err(ConstructionError::InvalidBlockSize(block_size));
        }

        debug!("created {} padder with block size {}", scheme, block_size);
        Ok(Self { scheme, block_size })
    }

    /// Creates a padder from the numeric identifier of a scheme, see [`PaddingScheme::id`].
    pub fn from_id(id: u8, block_size: usize) -> Result<Self, ConstructionError> {
        let scheme = PaddingScheme::try_from(id).inspect_err(|_| warn!("rejected padding scheme id {}", id))?;
        Self::new(scheme, block_size)
    }

    pub fn scheme(&self) -> PaddingScheme {
        self.scheme
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Name of the padding scheme, e.g. `PKCS#7`.
    pub fn name(&self) -> &'static str {
        self.algorithm().name
    }

    /// Returns a copy of `data` with padding appended.
    ///
    /// The result is always a positive multiple of the block size long; empty data yields one
    /// block of padding. [`Padder::pad_last_block`] avoids copying the full blocks.
    ///
    /// # Panics
    ///
    /// With [`PaddingScheme::Zero`], if the data in the last block ends with a 0 byte.
    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        let (full_blocks, last_block) = self.pad_last_block(data);

        let mut padded = Vec::with_capacity(full_blocks.len() + last_block.len());
        padded.extend_from_slice(full_blocks);
        padded.extend_from_slice(&last_block);
        padded
    }

    /// Pads `data` without copying all of it.
    ///
    /// Returns the part of `data` that consists of full blocks and a new block holding the
    /// rest of `data` followed by the padding. Concatenated, they equal [`Padder::pad`].
    ///
    /// # Panics
    ///
    /// With [`PaddingScheme::Zero`], if the data in the last block ends with a 0 byte.
    pub fn pad_last_block<'a>(&self, data: &'a [u8]) -> (&'a [u8], Vec<u8>) {
        let (full_blocks, last_data) = data.split_at(data.len() - data.len() % self.block_size);

        let mut last_block = vec![0u8; self.block_size];
        fillers::fill_last_block(self.algorithm().fill, &mut last_block, last_data);

        (full_blocks, last_block)
    }

    /// Removes the padding from `data`.
    ///
    /// Returns a slice into `data`, which is empty if `data` was only padding. Which check
    /// failed is never revealed, all malformed paddings yield [`UnpadError::InvalidPadding`].
    pub fn unpad<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], UnpadError> {
        if data.is_empty() || data.len() % self.block_size != 0 {
            debug!(
                "{}: padded data length {} is not a multiple of block size {}",
                self.name(),
                data.len(),
                self.block_size
            );
            return Err(UnpadError::InvalidPaddedDataLength);
        }

        (self.algorithm().remove)(data, self.block_size)
    }

    fn algorithm(&self) -> &'static Algorithm {
        registry::algorithm(self.scheme)
    }
}

impl fmt::Display for Padder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
