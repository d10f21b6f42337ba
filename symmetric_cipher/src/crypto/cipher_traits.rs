use crate::crypto::error::CipherError;

pub trait SymmetricCipher {
    /// Rebuilds all key-dependent state from `key`.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

/// A 64-bit block cipher. Blocks travel as two big-endian `u32` halves,
/// `left` holding bytes 0..4 and `right` bytes 4..8.
pub trait BlockCipher: SymmetricCipher {
    fn encrypt_block(&self, left: u32, right: u32) -> (u32, u32);
    fn decrypt_block(&self, left: u32, right: u32) -> (u32, u32);
}
