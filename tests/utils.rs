use blockpad::{Padder, PaddingScheme};

#[allow(dead_code)]
pub const BLOCK_SIZE: usize = 16;

/// Random data that can be padded with every scheme, i.e. it does not end with a 0 byte.
#[allow(dead_code)]
pub fn test_data(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::fill(&mut data[..]);
    if let Some(last) = data.last_mut() {
        *last = 0x5a;
    }
    data
}

#[allow(dead_code)]
pub fn padder(scheme: PaddingScheme, block_size: usize) -> Padder {
    Padder::new(scheme, block_size).unwrap_or_else(|err| panic!("creating {} padder failed: {}", scheme, err))
}
