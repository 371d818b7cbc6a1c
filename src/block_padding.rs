//! The paddings as [`RawPadding`] implementations, for use with the block modes of the
//! RustCrypto project, e.g. `cbc::Encryptor::encrypt_padded_mut::<Pkcs7>`.
//!
//! They use the same fillers and removers as [`Padder`](crate::Padder).

use crate::fillers;
use crate::padder::MAX_BLOCK_SIZE;
use crate::registry;
use crate::scheme::PaddingScheme;
use aes::cipher::block_padding::{PadType, RawPadding, UnpadError};

fn pad_block(scheme: PaddingScheme, block: &mut [u8], pos: usize) {
    if block.len() > MAX_BLOCK_SIZE {
        panic!("block size is too big for {} padding", scheme);
    }
    if pos >= block.len() {
        panic!("`pos` is bigger or equal to block size");
    }

    // The filler writes the whole block, so it works on a copy that is written back in full.
    let mut buffer = [0u8; MAX_BLOCK_SIZE];
    let last_block = &mut buffer[..block.len()];
    fillers::fill_last_block(registry::algorithm(scheme).fill, last_block, &block[..pos]);
    block.copy_from_slice(last_block);
}

fn unpad_block(scheme: PaddingScheme, block: &[u8]) -> Result<&[u8], UnpadError> {
    if block.len() > MAX_BLOCK_SIZE {
        panic!("block size is too big for {} padding", scheme);
    }
    if block.is_empty() {
        return Err(UnpadError);
    }

    (registry::algorithm(scheme).remove)(block, block.len()).map_err(|_| UnpadError)
}

macro_rules! raw_padding {
    ($(#[$doc:meta])* $name:ident, $scheme:expr, $pad_type:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl RawPadding for $name {
            const TYPE: PadType = $pad_type;

            #[inline]
            fn raw_pad(block: &mut [u8], pos: usize) {
                pad_block($scheme, block, pos)
            }

            #[inline]
            fn raw_unpad(block: &[u8]) -> Result<&[u8], UnpadError> {
                unpad_block($scheme, block)
            }
        }
    };
}

raw_padding!(
    /// Pad with zero bytes. Padding data whose last block ends with a 0 byte panics.
    ZeroPadding,
    PaddingScheme::Zero,
    PadType::Ambiguous
);

raw_padding!(
    /// Pad with bytes with value equal to the number of bytes added.
    ///
    /// PKCS#7 is described in [RFC 5652](https://tools.ietf.org/html/rfc5652).
    Pkcs7,
    PaddingScheme::Pkcs7,
    PadType::Reversible
);

raw_padding!(
    /// Pad with zero bytes and a last byte holding the number of bytes added (ANSI X.923).
    AnsiX923,
    PaddingScheme::X923,
    PadType::Reversible
);

raw_padding!(
    /// Pad with random bytes and a last byte holding the number of bytes added (ISO 10126).
    Iso10126,
    PaddingScheme::Iso10126,
    PadType::Reversible
);

raw_padding!(
    /// Pad with the bytes `1, 2, ..., n`, as IPsec ESP does.
    ///
    /// Described in [RFC 4303](https://tools.ietf.org/html/rfc4303#section-2.4).
    Rfc4303,
    PaddingScheme::Rfc4303,
    PadType::Reversible
);

raw_padding!(
    /// Pad with a `0x80` byte followed by zero bytes (ISO 7816-4).
    Iso7816,
    PaddingScheme::Iso78164,
    PadType::Reversible
);

raw_padding!(
    /// Pad with a random byte value that differs from the last data byte.
    ArbitraryTailByte,
    PaddingScheme::ArbitraryTailByte,
    PadType::Reversible
);

raw_padding!(
    /// Same layout as [`ArbitraryTailByte`] with a cheaper removal.
    NotLastByte,
    PaddingScheme::NotLastByte,
    PadType::Reversible
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pad_keeps_data() {
        let mut block = [1u8, 2, 3, 0, 0, 0, 0, 0];
        Pkcs7::raw_pad(&mut block, 3);
        assert_eq!(block, [1, 2, 3, 5, 5, 5, 5, 5]);
        assert_eq!(Pkcs7::raw_unpad(&block).unwrap(), &[1u8, 2, 3]);

        let mut block = [1u8, 2, 3, 9, 9, 9, 9, 9];
        Iso7816::raw_pad(&mut block, 3);
        assert_eq!(block, [1, 2, 3, 0x80, 0, 0, 0, 0]);

        let mut block = [1u8, 2, 3, 9];
        Rfc4303::raw_pad(&mut block, 1);
        assert_eq!(block, [1, 1, 2, 3]);

        let mut block = [1u8, 2, 9, 9, 9, 9];
        AnsiX923::raw_pad(&mut block, 2);
        assert_eq!(block, [1, 2, 0, 0, 0, 4]);
    }

    #[test]
    fn raw_unpad_rejects_malformed_block() {
        assert!(AnsiX923::raw_unpad(&[1, 2, 3, 3]).is_err());
        assert!(Rfc4303::raw_unpad(&[]).is_err());
        assert!(NotLastByte::raw_unpad(&[1, 2, 3, 3]).is_ok());
    }

    #[test]
    #[should_panic(expected = "`pos` is bigger or equal to block size")]
    fn raw_pad_needs_room() {
        let mut block = [0u8; 4];
        ArbitraryTailByte::raw_pad(&mut block, 4);
    }

    #[test]
    #[should_panic(expected = "block size is too big")]
    fn raw_pad_rejects_large_block() {
        let mut block = [0u8; 256];
        Iso10126::raw_pad(&mut block, 0);
    }
}
