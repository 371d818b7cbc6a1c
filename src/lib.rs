//! Block cipher paddings.
//!
//! Block ciphers in e.g. ECB, CBC or PCBC mode need data whose length is a multiple of the
//! block size. A [`Padder`] appends padding before encryption and removes it after
//! decryption, using one of the schemes in [`PaddingScheme`].
//!
//! Removing the padding takes the same time no matter where the padding starts, so timing does
//! not reveal the pad length. Most schemes can still fail to unpad, which a padding oracle
//! attack exploits. Use them with integrity protection, or use
//! [`PaddingScheme::ArbitraryTailByte`], whose removal never fails.
//!
//! ```
//! use blockpad::{Padder, PaddingScheme};
//!
//! let padder = Padder::new(PaddingScheme::Pkcs7, 16)?;
//! let padded = padder.pad(b"Beware the ides of march");
//! assert_eq!(padded.len(), 32);
//! assert_eq!(padder.unpad(&padded)?, b"Beware the ides of march");
//! # Ok::<(), blockpad::Error>(())
//! ```

pub mod block_padding;
mod config;
mod error;
mod fillers;
mod padder;
mod registry;
mod removers;
mod scheme;

pub use config::PadderConfig;
pub use error::{ConstructionError, Error, Result, UnpadError};
pub use padder::{MAX_BLOCK_SIZE, Padder};
pub use scheme::{PaddingScheme, UnknownSchemeName};
