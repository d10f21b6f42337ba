use symmetric_cipher::crypto::utils::{add32, unpack_be32, xor32};

/// Blowfish round function.
///
/// The four bytes of `x`, most significant first, index S-boxes 0 to 3; the
/// lookups combine as `((S0 + S1) ^ S2) + S3` with additions modulo 2^32.
pub fn round_function(s_boxes: &[[u32; 256]; 4], x: u32) -> u32 {
    let [a, b, c, d] = unpack_be32(x);
    add32(
        xor32(
            add32(s_boxes[0][a as usize], s_boxes[1][b as usize]),
            s_boxes[2][c as usize],
        ),
        s_boxes[3][d as usize],
    )
}
