//! Padding removal.
//!
//! Every remover looks at every byte of the last block, also after it knows the answer, and
//! combines its checks with [`subtle`] instead of branching on byte values. So the time it
//! takes does not tell where the padding starts. The only branch on the result happens after
//! the scan.
//!
//! All removers expect `data` to be a positive multiple of `block_size` long, with
//! `block_size` not above 255.

use crate::error::UnpadError;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

/// Removes zero padding (ISO 10118-1 and ISO 9797-1 method 1).
///
/// Fails if the last byte is not zero, so this is susceptible to a padding oracle.
pub(crate) fn zero(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (start, block) = last_block(data, block_size);

    let mut end = 0u32;
    let mut found = Choice::from(0);
    for (b, dist) in from_end(block) {
        let non_zero = !b.ct_eq(&0);
        end.conditional_assign(&(block_size as u32 - dist as u32 + 1), non_zero & !found);
        found |= non_zero;
    }

    let valid = block[block_size - 1].ct_eq(&0);
    checked(valid, &data[..start + end as usize])
}

/// Removes PKCS#7 padding (RFC 5652).
///
/// Fails on malformed padding, so this is susceptible to a padding oracle.
pub(crate) fn pkcs7(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (_, block) = last_block(data, block_size);
    let (pad_len, mut valid) = length_byte(block);

    for (b, dist) in from_end(block) {
        let in_pad = !dist.ct_gt(&pad_len);
        valid &= !in_pad | b.ct_eq(&pad_len);
    }

    strip(data, pad_len, valid)
}

/// Removes ANSI X.923 padding.
///
/// Fails on malformed padding, so this is susceptible to a padding oracle.
pub(crate) fn x923(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (_, block) = last_block(data, block_size);
    let (pad_len, mut valid) = length_byte(block);

    for (b, dist) in from_end(block) {
        let in_pad = !dist.ct_gt(&pad_len);
        let is_length = dist.ct_eq(&1);
        valid &= !in_pad | is_length | b.ct_eq(&0);
    }

    strip(data, pad_len, valid)
}

/// Removes ISO 10126 padding. Only the length byte carries information.
///
/// Fails on an invalid length, so this is susceptible to a padding oracle.
pub(crate) fn iso10126(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (_, block) = last_block(data, block_size);
    let (pad_len, valid) = length_byte(block);

    strip(data, pad_len, valid)
}

/// Removes RFC 4303 padding (IPsec).
///
/// Fails on malformed padding, so this is susceptible to a padding oracle.
pub(crate) fn rfc4303(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (_, block) = last_block(data, block_size);
    let (pad_len, mut valid) = length_byte(block);

    for (b, dist) in from_end(block) {
        let in_pad = !dist.ct_gt(&pad_len);
        let expected = pad_len.wrapping_sub(dist).wrapping_add(1);
        valid &= !in_pad | b.ct_eq(&expected);
    }

    strip(data, pad_len, valid)
}

/// Removes ISO 7816-4 padding (smart cards).
///
/// Fails if the first non-zero byte from the end is not the `0x80` marker, so this is
/// susceptible to a padding oracle.
pub(crate) fn iso7816_4(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (start, block) = last_block(data, block_size);

    let mut marker = 0u32;
    let mut found = Choice::from(0);
    let mut valid = Choice::from(0);
    for (b, dist) in from_end(block) {
        let non_zero = !b.ct_eq(&0);
        let first = non_zero & !found;
        marker.conditional_assign(&(block_size as u32 - dist as u32), first);
        valid |= first & b.ct_eq(&0x80);
        found |= non_zero;
    }

    checked(valid, &data[..start + marker as usize])
}

/// Removes arbitrary tail byte padding.
///
/// Never fails and is therefore not susceptible to a padding oracle.
pub(crate) fn arbitrary_tail_byte(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (start, block) = last_block(data, block_size);
    let fill = block[block_size - 1];

    let mut end = 0u32;
    let mut found = Choice::from(0);
    for (b, dist) in from_end(block) {
        let differs = !b.ct_eq(&fill);
        end.conditional_assign(&(block_size as u32 - dist as u32 + 1), differs & !found);
        found |= differs;
    }

    Ok(&data[..start + end as usize])
}

/// Removes not-last-byte padding, which has the layout of arbitrary tail byte padding.
///
/// Counts the run of fill bytes with masks instead of [`subtle`] selections, which is
/// cheaper. Never fails and is therefore not susceptible to a padding oracle.
pub(crate) fn not_last_byte(data: &[u8], block_size: usize) -> Result<&[u8], UnpadError> {
    let (_, block) = last_block(data, block_size);
    let fill = block[block_size - 1];

    // `run` is 1 while the bytes seen so far all equal `fill`.
    let mut run = 1usize;
    let mut pad_len = 0usize;
    for &b in block.iter().rev() {
        let diff = (b ^ fill) as usize;
        run &= diff.wrapping_sub(1) >> (usize::BITS - 1);
        pad_len += run;
    }

    Ok(&data[..data.len() - pad_len])
}

// -------- Helpers --------

/// Splits off the last block and returns its start index.
fn last_block(data: &[u8], block_size: usize) -> (usize, &[u8]) {
    let start = data.len() - block_size;
    (start, &data[start..])
}

/// Pairs every byte of the block with its distance from the end. The last byte has distance 1.
fn from_end(block: &[u8]) -> impl Iterator<Item = (u8, u8)> + '_ {
    block.iter().rev().copied().zip(1..=u8::MAX)
}

/// Reads the pad length from the last byte and checks that it lies in `1..=block.len()`.
fn length_byte(block: &[u8]) -> (u8, Choice) {
    let pad_len = block[block.len() - 1];
    let valid = !pad_len.ct_eq(&0) & !pad_len.ct_gt(&(block.len() as u8));
    (pad_len, valid)
}

/// Cuts `pad_len` bytes off `data` if the padding is valid.
///
/// A `pad_len` longer than `data` is clamped to 0 and makes the padding invalid.
fn strip(data: &[u8], pad_len: u8, valid: Choice) -> Result<&[u8], UnpadError> {
    let too_long = u64::from(pad_len).ct_gt(&(data.len() as u64));
    let pad_len = u64::conditional_select(&u64::from(pad_len), &0, too_long) as usize;
    checked(valid & !too_long, &data[..data.len() - pad_len])
}

fn checked(valid: Choice, unpadded: &[u8]) -> Result<&[u8], UnpadError> {
    if bool::from(valid) {
        Ok(unpadded)
    } else {
        Err(UnpadError::InvalidPadding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID: Result<&[u8], UnpadError> = Err(UnpadError::InvalidPadding);

    #[test]
    fn zero_finds_last_non_zero_byte() {
        assert_eq!(zero(&[1, 2, 0, 0], 4), Ok(&[1u8, 2][..]));
        assert_eq!(zero(&[1, 2, 3, 4, 5, 0, 0, 0], 4), Ok(&[1u8, 2, 3, 4, 5][..]));
        assert_eq!(zero(&[1, 2, 3, 4, 0, 0, 0, 0], 4), Ok(&[1u8, 2, 3, 4][..]));
        assert_eq!(zero(&[1, 2, 3, 4], 4), INVALID);
    }

    #[test]
    fn pkcs7_checks_every_pad_byte() {
        assert_eq!(pkcs7(&[1, 2, 2, 2], 4), Ok(&[1u8, 2][..]));
        assert_eq!(pkcs7(&[4, 4, 4, 4], 4), Ok(&[][..]));
        assert_eq!(pkcs7(&[1, 2, 3, 2], 4), INVALID);
        assert_eq!(pkcs7(&[1, 2, 3, 0], 4), INVALID);
        assert_eq!(pkcs7(&[5, 5, 5, 5], 4), INVALID);
        assert_eq!(pkcs7(&[3, 4, 4, 4], 4), INVALID);
    }

    #[test]
    fn x923_requires_zeroes_before_length() {
        assert_eq!(x923(&[9, 0, 0, 3], 4), Ok(&[9u8][..]));
        assert_eq!(x923(&[9, 9, 9, 1], 4), Ok(&[9u8, 9, 9][..]));
        assert_eq!(x923(&[9, 0, 1, 3], 4), INVALID);
        assert_eq!(x923(&[0, 0, 0, 0], 4), INVALID);
    }

    #[test]
    fn iso10126_checks_length_only() {
        assert_eq!(iso10126(&[9, 7, 8, 3], 4), Ok(&[9u8][..]));
        assert_eq!(iso10126(&[9, 7, 8, 4], 4), Ok(&[][..]));
        assert_eq!(iso10126(&[9, 7, 8, 5], 4), INVALID);
        assert_eq!(iso10126(&[9, 7, 8, 0], 4), INVALID);
    }

    #[test]
    fn rfc4303_requires_counting_sequence() {
        assert_eq!(rfc4303(&[9, 1, 2, 3], 4), Ok(&[9u8][..]));
        assert_eq!(rfc4303(&[1, 2, 3, 4], 4), Ok(&[][..]));
        assert_eq!(rfc4303(&[9, 9, 9, 1], 4), Ok(&[9u8, 9, 9][..]));
        assert_eq!(rfc4303(&[9, 1, 1, 3], 4), INVALID);
        assert_eq!(rfc4303(&[9, 3, 2, 3], 4), INVALID);
    }

    #[test]
    fn iso7816_4_requires_marker() {
        assert_eq!(iso7816_4(&[9, 0x80, 0, 0], 4), Ok(&[9u8][..]));
        assert_eq!(iso7816_4(&[0x80, 0, 0, 0], 4), Ok(&[][..]));
        assert_eq!(iso7816_4(&[0, 0, 0, 0x80], 4), Ok(&[0u8, 0, 0][..]));
        assert_eq!(iso7816_4(&[0x80, 0, 0x81, 0], 4), INVALID);
        assert_eq!(iso7816_4(&[0, 0, 0, 0], 4), INVALID);
        // The marker has to be in the last block.
        assert_eq!(iso7816_4(&[1, 2, 3, 0x80, 0, 0, 0, 0], 4), INVALID);
    }

    #[test]
    fn tail_byte_removers_agree() {
        let cases: [(&[u8], &[u8]); 4] = [
            (&[1, 2, 7, 7], &[1, 2]),
            (&[7, 7, 7, 7], &[]),
            (&[1, 2, 3, 4], &[1, 2, 3]),
            (&[1, 2, 3, 4, 5, 6, 6, 6], &[1, 2, 3, 4, 5]),
        ];
        for (padded, expected) in cases {
            assert_eq!(arbitrary_tail_byte(padded, 4), Ok(expected));
            assert_eq!(not_last_byte(padded, 4), Ok(expected));
        }
    }

    #[test]
    fn largest_block_size() {
        let mut block = vec![0x42u8; 255];
        block[0] = 1;
        assert_eq!(arbitrary_tail_byte(&block, 255), Ok(&[1u8][..]));
        assert_eq!(not_last_byte(&block, 255), Ok(&[1u8][..]));

        let padded = vec![255u8; 255];
        assert_eq!(pkcs7(&padded, 255), Ok(&[][..]));
        assert_eq!(iso10126(&padded, 255), Ok(&[][..]));
    }

    #[test]
    fn strip_clamps_overlong_pad_length() {
        assert_eq!(strip(&[1, 2, 3], 3, Choice::from(1)), Ok(&[][..]));
        assert_eq!(strip(&[1, 2, 3], 4, Choice::from(1)), INVALID);
        assert_eq!(strip(&[1, 2, 3], 255, Choice::from(1)), INVALID);
        assert_eq!(strip(&[1, 2, 3], 1, Choice::from(0)), INVALID);
    }
}
