#[cfg(test)]
mod tests {
    use blowfish::Blowfish;
    use hex_literal::hex;
    use symmetric_cipher::crypto::utils::{block_to_halves, halves_to_block};
    use symmetric_cipher::{BlockCipher, CipherError, SymmetricCipher};

    // Eric Young's published Blowfish ECB vectors: (key, plaintext, ciphertext)
    const VECTORS: [([u8; 8], [u8; 8], [u8; 8]); 7] = [
        (hex!("0000000000000000"), hex!("0000000000000000"), hex!("4EF997456198DD78")),
        (hex!("FFFFFFFFFFFFFFFF"), hex!("FFFFFFFFFFFFFFFF"), hex!("51866FD5B85ECB8A")),
        (hex!("3000000000000000"), hex!("1000000000000001"), hex!("7D856F9A613063F2")),
        (hex!("1111111111111111"), hex!("1111111111111111"), hex!("2466DD878B963C9D")),
        (hex!("0123456789ABCDEF"), hex!("1111111111111111"), hex!("61F9C3802281B096")),
        (hex!("FEDCBA9876543210"), hex!("0123456789ABCDEF"), hex!("0ACEAB0FC6A0A28D")),
        (hex!("7CA110454A1A6E57"), hex!("01A1D6D039776742"), hex!("59C68245EB05282B")),
    ];

    fn encrypt(cipher: &Blowfish, block: &[u8; 8]) -> [u8; 8] {
        let (l, r) = block_to_halves(block);
        let (l, r) = cipher.encrypt_block(l, r);
        halves_to_block(l, r)
    }

    fn decrypt(cipher: &Blowfish, block: &[u8; 8]) -> [u8; 8] {
        let (l, r) = block_to_halves(block);
        let (l, r) = cipher.decrypt_block(l, r);
        halves_to_block(l, r)
    }

    #[test]
    fn test_encrypt_known_vectors() {
        for (i, (key, plaintext, ciphertext)) in VECTORS.iter().enumerate() {
            let cipher = Blowfish::new(key).unwrap();
            assert_eq!(&encrypt(&cipher, plaintext), ciphertext, "vector #{}", i);
        }
    }

    #[test]
    fn test_decrypt_known_vectors() {
        for (i, (key, plaintext, ciphertext)) in VECTORS.iter().enumerate() {
            let cipher = Blowfish::new(key).unwrap();
            assert_eq!(&decrypt(&cipher, ciphertext), plaintext, "vector #{}", i);
        }
    }

    #[test]
    fn test_zero_key_block_as_words() {
        let cipher = Blowfish::new(&[0u8; 8]).unwrap();
        assert_eq!(cipher.encrypt_block(0, 0), (0x4EF99745, 0x6198DD78));
        assert_eq!(cipher.decrypt_block(0x4EF99745, 0x6198DD78), (0, 0));
    }

    #[test]
    fn test_short_and_long_keys() {
        let one_byte = Blowfish::new(&[0x01]).unwrap();
        assert_eq!(encrypt(&one_byte, &[0u8; 8]), hex!("6136c6152ea7c5a4"));

        // 72 bytes fill the P-array exactly once; longer keys are legal and
        // their tail never reaches the schedule.
        let long_key: Vec<u8> = (0..72).collect();
        let mut longer_key = long_key.clone();
        longer_key.extend_from_slice(b"ignored");
        let a = Blowfish::new(&long_key).unwrap();
        let b = Blowfish::new(&longer_key).unwrap();
        assert_eq!(encrypt(&a, b"ABCDEFGH"), encrypt(&b, b"ABCDEFGH"));
    }

    #[test]
    fn test_key_is_cycled() {
        // "ab" cycles to the same 72-byte stream as "abab"
        let short = Blowfish::new(b"ab").unwrap();
        let doubled = Blowfish::new(b"abab").unwrap();
        assert_eq!(encrypt(&short, b"12345678"), encrypt(&doubled, b"12345678"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(Blowfish::new(&[]).unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_set_key_switches_schedule() {
        let mut cipher = Blowfish::new(b"temporary").unwrap();
        cipher.set_key(&hex!("0123456789ABCDEF")).unwrap();
        assert_eq!(encrypt(&cipher, &hex!("1111111111111111")), hex!("61F9C3802281B096"));
    }

    #[test]
    fn test_extreme_words_roundtrip() {
        let cipher = Blowfish::new(b"boundaries").unwrap();
        for &(l, r) in &[(0, 0), (u32::MAX, u32::MAX), (0x8000_0000, 1), (1, 0x8000_0000)] {
            let (el, er) = cipher.encrypt_block(l, r);
            assert_eq!(cipher.decrypt_block(el, er), (l, r));
        }
    }
}
