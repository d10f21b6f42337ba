//! Run with `RUST_LOG=debug cargo run --example encrypt_demo` to see the
//! key schedule and configuration changes logged.

use rand::SeedableRng;
use rand::{RngCore, rngs::StdRng};

use blowfish::{Blowfish, CipherError, CipherMode, PaddingMode, ReturnType};
use symmetric_cipher::BlockCipher;
use symmetric_cipher::crypto::utils::{block_to_halves, halves_to_block};

fn random_bytes(len: usize, rng: &mut impl RngCore) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

fn main() -> Result<(), CipherError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(0x0B10_F15A);

    println!("=== Single block ===");
    let cipher = Blowfish::new(&[0u8; 8])?;
    let (l, r) = block_to_halves(&[0u8; 8]);
    let (el, er) = cipher.encrypt_block(l, r);
    println!(" Zero key, zero block: {:02x?}", halves_to_block(el, er));
    assert_eq!(cipher.decrypt_block(el, er), (l, r));

    println!("=== Modes and paddings ===");
    let text = "The quick brown fox jumps over the lazy dog";
    let paddings = [
        PaddingMode::PKCS5,
        PaddingMode::OneAndZeros,
        PaddingMode::LastByte,
        PaddingMode::Null,
        PaddingMode::Spaces,
    ];
    for mode in [CipherMode::ECB, CipherMode::CBC] {
        for padding in paddings {
            let mut bf = blowfish::cipher(random_bytes(16, &mut rng), mode, padding)?;
            bf.set_iv(random_bytes(8, &mut rng))?;

            let encoded = bf.encode(text)?;
            println!(
                " {:>3} + {:<13} {} bytes, last block {:02x?}",
                mode,
                padding,
                encoded.as_bytes().len(),
                &encoded.as_bytes()[encoded.as_bytes().len() - 8..]
            );

            bf.set_return_type(ReturnType::String);
            let decoded = bf.decode(encoded.into_bytes())?;
            assert_eq!(decoded.as_text(), Some(text));
        }
    }

    println!("=== Rejected inputs ===");
    let mut bf = blowfish::cipher("demo key", CipherMode::CBC, PaddingMode::PKCS5)?;
    if let Err(e) = bf.encode("no iv yet") {
        println!(" encode without IV: {}", e);
    }
    if let Err(e) = bf.set_iv("short") {
        println!(" set_iv(\"short\"): {}", e);
    }
    bf.set_iv("12345678")?;
    if let Err(e) = bf.decode("1234567") {
        println!(" decode of 7 bytes: {}", e);
    }
    if let Err(e) = "CTR".parse::<CipherMode>() {
        println!(" parse \"CTR\": {}", e);
    }

    Ok(())
}
