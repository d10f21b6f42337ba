use crate::crypto::blowfish::{Blowfish, ROUNDS};
use crate::crypto::tables::{P_INIT, S_INIT};
use symmetric_cipher::crypto::utils::{pack_be32, xor32};

/// Derives the P-array and S-boxes of `cipher` from `key`.
///
/// Starts over from the pi tables, so any previous schedule is discarded.
/// `key` must be non-empty; its bytes are cycled as often as needed.
pub(crate) fn expand_key(cipher: &mut Blowfish, key: &[u8]) {
    debug_assert!(!key.is_empty());

    cipher.p_array = P_INIT;
    cipher.s_boxes = S_INIT;

    let mut key_bytes = key.iter().copied().cycle();
    for slot in cipher.p_array.iter_mut() {
        let mut next = || key_bytes.next().unwrap_or_default();
        let word = pack_be32(next(), next(), next(), next());
        *slot = xor32(*slot, word);
    }

    // The state chains through every encryption, P-array first, then S-boxes.
    let (mut left, mut right) = (0u32, 0u32);
    for i in (0..ROUNDS + 2).step_by(2) {
        (left, right) = cipher.encrypt_halves(left, right);
        cipher.p_array[i] = left;
        cipher.p_array[i + 1] = right;
    }

    for b in 0..4 {
        for i in (0..256).step_by(2) {
            (left, right) = cipher.encrypt_halves(left, right);
            cipher.s_boxes[b][i] = left;
            cipher.s_boxes[b][i + 1] = right;
        }
    }

    log::debug!("Blowfish key schedule built from a {}-byte key", key.len());
}
