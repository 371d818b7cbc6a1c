//! Builders for the padding of the last block.
//!
//! Every filler writes a whole block, no matter how many bytes of it end up as padding.
//! [`fill_last_block`] zeroes the pad region first and copies the data of the last block over
//! the front last, so the work done does not depend on the pad length.

use crate::padder::MAX_BLOCK_SIZE;
use crate::registry::FillFn;
use subtle::{Choice, ConditionallySelectable};

const ZERO_BLOCK: [u8; MAX_BLOCK_SIZE] = [0; MAX_BLOCK_SIZE];

/// Builds the last block from `last_data` and the padding written by `fill`.
///
/// `last_block` may hold anything beforehand. Zeroing the pad region and copying the data are
/// `pad_len + last_data.len() == last_block.len()` byte writes for every pad length.
pub(crate) fn fill_last_block(fill: FillFn, last_block: &mut [u8], last_data: &[u8]) {
    let pad_len = last_block.len() - last_data.len();
    last_block[last_data.len()..].copy_from_slice(&ZERO_BLOCK[..pad_len]);
    fill(last_block, last_data, pad_len);
    last_block[..last_data.len()].copy_from_slice(last_data);
}

/// Zero padding needs no work, the pad region is zeroed already.
///
/// Panics if the last data byte is 0, as the padding could not be told apart from the data.
pub(crate) fn zero(_last_block: &mut [u8], last_data: &[u8], _pad_len: usize) {
    if last_data.last() == Some(&0) {
        panic!("last data byte must not be 0 with zero padding");
    }
}

pub(crate) fn pkcs7(last_block: &mut [u8], _last_data: &[u8], pad_len: usize) {
    last_block.fill(pad_len as u8);
}

pub(crate) fn x923(last_block: &mut [u8], _last_data: &[u8], pad_len: usize) {
    let last = last_block.len() - 1;
    last_block[last] = pad_len as u8;
}

pub(crate) fn iso10126(last_block: &mut [u8], _last_data: &[u8], pad_len: usize) {
    rand::fill(last_block);

    let last = last_block.len() - 1;
    last_block[last] = pad_len as u8;
}

/// Counts down from `pad_len` at the last byte, so the padding reads `1, 2, ..., pad_len`.
pub(crate) fn rfc4303(last_block: &mut [u8], _last_data: &[u8], pad_len: usize) {
    let mut pad_byte = pad_len as u8;
    for b in last_block.iter_mut().rev() {
        *b = pad_byte;
        pad_byte = pad_byte.wrapping_sub(1);
    }
}

pub(crate) fn iso7816_4(last_block: &mut [u8], last_data: &[u8], _pad_len: usize) {
    last_block[last_data.len()] = 0x80;
}

/// Fills with one random value that is not the value of the last data byte.
///
/// This is the only padding that is *not* susceptible to a padding oracle.
pub(crate) fn arbitrary_tail_byte(last_block: &mut [u8], last_data: &[u8], _pad_len: usize) {
    last_block.fill(fill_byte(last_data));
}

/// Draws the fill value for the tail byte paddings.
///
/// Both draws are always made. With data in the last block the value is uniform over the 255
/// values that differ from the last data byte, otherwise over all 256 values.
fn fill_byte(last_data: &[u8]) -> u8 {
    // 1..=255 added to the last byte never yields the last byte itself.
    let offset: u8 = rand::random_range(1..=u8::MAX);
    let any: u8 = rand::random();

    let last = last_data.last().copied().unwrap_or(0);
    let not_last = last.wrapping_add(offset);

    let pad_only = Choice::from(last_data.is_empty() as u8);
    u8::conditional_select(&not_last, &any, pad_only)
}
