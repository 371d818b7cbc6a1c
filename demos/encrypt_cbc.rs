use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use blockpad::{Padder, PaddingScheme};
use clap::Parser;
use env_logger::Env;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Encrypt a message with AES-256-CBC, padded with the given scheme, and decrypt it again."
)]
pub struct Args {
    /// The message to encrypt.
    #[arg(default_value = "Beware the ides of march")]
    pub message: String,

    /// Padding scheme, e.g. pkcs7, iso7816-4 or arbitrary-tail-byte.
    #[arg(short, long, default_value = "arbitrary-tail-byte")]
    pub scheme: PaddingScheme,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
    let args = Args::parse();

    // Use a fresh key and IV for every message.
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    rand::fill(&mut key);
    rand::fill(&mut iv);

    let key: &[u8] = &key;
    let padder = Padder::new(args.scheme, 16)?;

    // The full blocks are borrowed, only the last one is padded. CBC works in place, so join them.
    let (full_blocks, last_block) = padder.pad_last_block(args.message.as_bytes());
    let mut buffer = [full_blocks, &last_block[..]].concat();
    let len = buffer.len();
    Aes256CbcEnc::new(key.into(), &iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut buffer, len)
        .map_err(|_| "encryption failed")?;
    println!("{} padded ciphertext: {:02x?}", padder, buffer);

    let decrypted = Aes256CbcDec::new(key.into(), &iv.into())
        .decrypt_padded_mut::<NoPadding>(&mut buffer)
        .map_err(|_| "decryption failed")?;
    let plaintext = padder.unpad(decrypted)?;

    println!("decrypted: {}", String::from_utf8_lossy(plaintext));
    assert_eq!(plaintext, args.message.as_bytes());

    Ok(())
}
