use crate::error::UnpadError;
use crate::fillers;
use crate::removers;
use crate::scheme::PaddingScheme;

/// Writes a full block of padding into `last_block`.
///
/// `last_block` has the length of a block and is zeroed, `last_data` holds the data that
/// belongs into the last block and `pad_len` equals `last_block.len() - last_data.len()`.
/// Only the bytes from `last_data.len()` on are kept, the front is overwritten with
/// `last_data` afterwards.
pub(crate) type FillFn = fn(last_block: &mut [u8], last_data: &[u8], pad_len: usize);

/// Finds the end of the data in `data`, whose length is a positive multiple of `block_size`.
pub(crate) type RemoveFn = fn(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError>;

/// Name, filler and remover of one padding scheme.
pub(crate) struct Algorithm {
    pub name: &'static str,
    pub fill: FillFn,
    pub remove: RemoveFn,
}

/// Indexed by [`PaddingScheme::id`].
static ALGORITHMS: [Algorithm; 8] = [
    Algorithm {
        name: "Zero",
        fill: fillers::zero,
        remove: removers::zero,
    },
    Algorithm {
        name: "PKCS#7",
        fill: fillers::pkcs7,
        remove: removers::pkcs7,
    },
    Algorithm {
        name: "X.923",
        fill: fillers::x923,
        remove: removers::x923,
    },
    Algorithm {
        name: "ISO 10126",
        fill: fillers::iso10126,
        remove: removers::iso10126,
    },
    Algorithm {
        name: "RFC 4303",
        fill: fillers::rfc4303,
        remove: removers::rfc4303,
    },
    Algorithm {
        name: "ISO 7816-4",
        fill: fillers::iso7816_4,
        remove: removers::iso7816_4,
    },
    Algorithm {
        name: "Arbitrary Tail Byte",
        fill: fillers::arbitrary_tail_byte,
        remove: removers::arbitrary_tail_byte,
    },
    Algorithm {
        name: "Not Last Byte",
        fill: fillers::arbitrary_tail_byte,
        remove: removers::not_last_byte,
    },
];

pub(crate) fn algorithm(scheme: PaddingScheme) -> &'static Algorithm {
    &ALGORITHMS[scheme as usize]
}
