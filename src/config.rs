use crate::error::ConstructionError;
use crate::padder::Padder;
use crate::scheme::PaddingScheme;

/// Padding settings as stored in an application's configuration.
///
/// With the `serde` feature this (de)serializes as e.g.
/// `{"scheme": "arbitrary-tail-byte", "block_size": 16}`. Missing fields take the
/// [`Default`] values, PKCS#7 with the AES block size of 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PadderConfig {
    pub scheme: PaddingScheme,
    pub block_size: usize,
}

impl Default for PadderConfig {
    fn default() -> Self {
        Self {
            scheme: PaddingScheme::Pkcs7,
            block_size: 16,
        }
    }
}

impl PadderConfig {
    pub fn new(scheme: PaddingScheme, block_size: usize) -> Self {
        Self { scheme, block_size }
    }

    /// Validates the settings and creates the padder.
    pub fn build(&self) -> Result<Padder, ConstructionError> {
        Padder::new(self.scheme, self.block_size)
    }
}

impl TryFrom<PadderConfig> for Padder {
    type Error = ConstructionError;

    fn try_from(config: PadderConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<Padder> for PadderConfig {
    fn from(padder: Padder) -> Self {
        Self::new(padder.scheme(), padder.block_size())
    }
}
