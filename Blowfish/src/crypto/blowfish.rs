use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::expand_key;
use crate::crypto::tables::{P_INIT, S_INIT};
use std::fmt;
use symmetric_cipher::crypto::utils::xor32;
use symmetric_cipher::{BlockCipher, CipherError, SymmetricCipher};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const ROUNDS: usize = 16;

/// Blowfish subkeys: 18 round keys and four 256-entry S-boxes.
///
/// The tables are fixed-size and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blowfish {
    pub(crate) p_array: [u32; ROUNDS + 2],
    pub(crate) s_boxes: [[u32; 256]; 4],
}

impl Blowfish {
    /// Builds the key schedule for `key` (any non-empty length).
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = Self::default();
        cipher.set_key(key)?;
        Ok(cipher)
    }

    /// Encrypts one block through the 16-round Feistel network.
    pub(crate) fn encrypt_halves(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in 0..ROUNDS {
            left = xor32(left, self.p_array[i]);
            right = xor32(right, round_function(&self.s_boxes, left));
            (left, right) = (right, left);
        }
        (left, right) = (right, left);

        right = xor32(right, self.p_array[ROUNDS]);
        left = xor32(left, self.p_array[ROUNDS + 1]);
        (left, right)
    }

    /// Inverse of `encrypt_halves`: same rounds, round keys in reverse.
    pub(crate) fn decrypt_halves(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in (2..ROUNDS + 2).rev() {
            left = xor32(left, self.p_array[i]);
            right = xor32(right, round_function(&self.s_boxes, left));
            (left, right) = (right, left);
        }
        (left, right) = (right, left);

        right = xor32(right, self.p_array[1]);
        left = xor32(left, self.p_array[0]);
        (left, right)
    }
}

/// Unkeyed tables, straight from the digits of pi. Usable as a cipher only
/// after `set_key`.
impl Default for Blowfish {
    fn default() -> Self {
        Blowfish {
            p_array: P_INIT,
            s_boxes: S_INIT,
        }
    }
}

impl fmt::Debug for Blowfish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blowfish").finish_non_exhaustive()
    }
}

impl SymmetricCipher for Blowfish {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        expand_key(self, key);
        Ok(())
    }
}

impl BlockCipher for Blowfish {
    fn encrypt_block(&self, left: u32, right: u32) -> (u32, u32) {
        self.encrypt_halves(left, right)
    }

    fn decrypt_block(&self, left: u32, right: u32) -> (u32, u32) {
        self.decrypt_halves(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_holds_pi_tables() {
        let cipher = Blowfish::default();
        assert_eq!(cipher.p_array[0], 0x243f6a88);
        assert_eq!(cipher.p_array[17], 0x8979fb1b);
        assert_eq!(cipher.s_boxes[0][0], 0xd1310ba6);
        assert_eq!(cipher.s_boxes[3][255], 0x3ac372e6);
    }

    #[test]
    fn test_rekey_starts_from_pi_tables() {
        let mut cipher = Blowfish::new(b"first key").unwrap();
        cipher.set_key(b"second key").unwrap();
        let fresh = Blowfish::new(b"second key").unwrap();
        assert_eq!(cipher.p_array, fresh.p_array);
        assert_eq!(cipher.s_boxes, fresh.s_boxes);
    }

    #[test]
    fn test_failed_rekey_keeps_schedule() {
        let mut cipher = Blowfish::new(b"kept").unwrap();
        let before = cipher.p_array;
        assert_eq!(cipher.set_key(&[]), Err(CipherError::InvalidKey));
        assert_eq!(cipher.p_array, before);
    }

    #[test]
    fn test_debug_does_not_print_tables() {
        let cipher = Blowfish::new(b"key").unwrap();
        assert_eq!(format!("{:?}", cipher), "Blowfish { .. }");
    }
}
