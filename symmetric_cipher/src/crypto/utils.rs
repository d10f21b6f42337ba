use crate::crypto::cipher_types::{BLOCK_SIZE, PaddingMode};

/// Reinterprets a signed 32-bit value as unsigned, two's complement.
pub const fn to_unsigned32(x: i32) -> u32 {
    x as u32
}

pub const fn xor32(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Addition modulo 2^32.
pub const fn add32(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

pub const fn pack_be32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    ((b0 as u32) << 24) | ((b1 as u32) << 16) | ((b2 as u32) << 8) | (b3 as u32)
}

pub const fn unpack_be32(word: u32) -> [u8; 4] {
    [
        (word >> 24) as u8,
        ((word >> 16) & 0xFF) as u8,
        ((word >> 8) & 0xFF) as u8,
        (word & 0xFF) as u8,
    ]
}

/// Splits an 8-byte block into its big-endian halves.
pub fn block_to_halves(block: &[u8]) -> (u32, u32) {
    (
        pack_be32(block[0], block[1], block[2], block[3]),
        pack_be32(block[4], block[5], block[6], block[7]),
    )
}

pub fn halves_to_block(left: u32, right: u32) -> [u8; BLOCK_SIZE] {
    let l = unpack_be32(left);
    let r = unpack_be32(right);
    [l[0], l[1], l[2], l[3], r[0], r[1], r[2], r[3]]
}

/// Pads `data` up to a multiple of `BLOCK_SIZE`.
///
/// Input that is already block-aligned, including empty input, is returned
/// unchanged for every scheme. No scheme ever appends a whole block.
pub fn apply_padding(mut data: Vec<u8>, padding: PaddingMode) -> Vec<u8> {
    let count = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    if count == BLOCK_SIZE {
        return data;
    }

    match padding {
        PaddingMode::PKCS5 => data.extend(vec![count as u8; count]),
        PaddingMode::OneAndZeros => {
            data.push(0x80);
            data.extend(vec![0; count - 1]);
        }
        PaddingMode::LastByte => {
            data.extend(vec![0; count - 1]);
            data.push(count as u8);
        }
        PaddingMode::Null => data.extend(vec![0; count]),
        PaddingMode::Spaces => data.extend(vec![0x20; count]),
    }
    data
}

/// Number of trailing bytes `remove_padding` would strip from `data`.
///
/// Malformed padding is never an error: it yields a cut of zero (or, for
/// `Null` / `Spaces`, whatever run of pad bytes happens to end the data).
pub fn padding_length(data: &[u8], padding: PaddingMode) -> usize {
    let Some(&last) = data.last() else {
        return 0;
    };
    let max_scan = (BLOCK_SIZE - 1).min(data.len());

    match padding {
        PaddingMode::PKCS5 | PaddingMode::LastByte => {
            let value = last as usize;
            if value < BLOCK_SIZE {
                value.min(data.len())
            } else {
                log::debug!("pad byte {:#04x} out of range, keeping data as is", last);
                0
            }
        }
        PaddingMode::OneAndZeros => {
            for (distance, &byte) in data.iter().rev().take(max_scan).enumerate() {
                match byte {
                    0x80 => return distance + 1,
                    0x00 => continue,
                    _ => break,
                }
            }
            0
        }
        PaddingMode::Null | PaddingMode::Spaces => {
            let pad_char = if padding == PaddingMode::Spaces { 0x20 } else { 0x00 };
            data.iter()
                .rev()
                .take(max_scan)
                .take_while(|&&byte| byte == pad_char)
                .count()
        }
    }
}

pub fn remove_padding(mut data: Vec<u8>, padding: PaddingMode) -> Vec<u8> {
    let cut = padding_length(&data, padding);
    data.truncate(data.len() - cut);
    data
}
