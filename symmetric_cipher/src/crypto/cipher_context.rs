use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{
    BLOCK_SIZE, CipherInput, CipherMode, CipherOutput, PaddingMode, ReturnType,
};
use crate::crypto::error::CipherError;
use crate::crypto::text_codec::{TextCodec, Utf8Codec};
use crate::crypto::utils::{
    apply_padding, block_to_halves, halves_to_block, remove_padding, xor32,
};
use rayon::prelude::*;
use std::fmt;
use zeroize::Zeroizing;

// ECB inputs from this size on are spread over the rayon pool
const PARALLEL_THRESHOLD: usize = 64 * 1024;
// Must stay a multiple of BLOCK_SIZE
const PARALLEL_CHUNK_SIZE: usize = 16 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Stateful front end of a 64-bit block cipher.
///
/// Holds the keyed algorithm together with the mode, padding, return type and
/// IV, validates every input, and runs padding, chaining and the block
/// transform in that order. Each `encode` / `decode` call starts chaining from
/// the IV as it is at call time; no chaining state survives between calls.
pub struct CipherContext {
    algorithm: Box<dyn BlockCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    return_type: ReturnType,
    iv: Vec<u8>,
    codec: Box<dyn TextCodec + Send + Sync>,
}

impl CipherContext {
    /// Wraps an already keyed algorithm. The IV starts out empty, so CBC
    /// operations fail until `set_iv` is called.
    pub fn new(
        algorithm: Box<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
    ) -> Self {
        Self {
            algorithm,
            mode,
            padding,
            return_type: ReturnType::default(),
            iv: Vec::new(),
            codec: Box::new(Utf8Codec),
        }
    }

    /// Re-keys the algorithm. Text keys go through the text codec first; the
    /// converted bytes are wiped once the schedule is built.
    pub fn set_key(&mut self, key: impl Into<CipherInput>) -> Result<(), CipherError> {
        let key = Zeroizing::new(self.input_bytes(key.into()));
        if key.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        self.algorithm.set_key(&key)
    }

    pub fn set_iv(&mut self, iv: impl Into<CipherInput>) -> Result<(), CipherError> {
        let iv = self.input_bytes(iv.into());
        if iv.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidIv(iv.len()));
        }
        log::debug!("IV replaced ({} bytes)", iv.len());
        self.iv = iv;
        Ok(())
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn set_mode(&mut self, mode: CipherMode) {
        log::debug!("mode set to {}", mode);
        self.mode = mode;
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn set_padding(&mut self, padding: PaddingMode) {
        log::debug!("padding set to {}", padding);
        self.padding = padding;
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn set_return_type(&mut self, return_type: ReturnType) {
        log::debug!("return type set to {}", return_type);
        self.return_type = return_type;
    }

    pub fn return_type(&self) -> ReturnType {
        self.return_type
    }

    pub fn set_text_codec(&mut self, codec: impl TextCodec + Send + Sync + 'static) {
        self.codec = Box::new(codec);
    }

    /// Pads and encrypts `input`.
    ///
    /// # Errors
    /// [`CipherError::InvalidIv`] in CBC mode when no 8-byte IV is set.
    pub fn encode(&self, input: impl Into<CipherInput>) -> Result<CipherOutput, CipherError> {
        let chain = self.chain_start()?;
        let data = apply_padding(self.input_bytes(input.into()), self.padding);
        log::trace!("encode {} bytes, mode {}, padding {}", data.len(), self.mode, self.padding);

        let encrypted = match chain {
            None => self.process_ecb(&data, Direction::Encrypt),
            Some(iv) => self.encrypt_cbc(&data, iv),
        };
        Ok(self.output(encrypted))
    }

    /// Decrypts `input` and strips its padding.
    ///
    /// Malformed padding is not reported: the bytes come back trimmed by
    /// whatever the padding rule finds, possibly nothing.
    ///
    /// # Errors
    /// [`CipherError::InvalidInputLength`] when `input` is not a whole number
    /// of blocks, [`CipherError::InvalidIv`] in CBC mode without an 8-byte IV.
    pub fn decode(&self, input: impl Into<CipherInput>) -> Result<CipherOutput, CipherError> {
        let data = self.input_bytes(input.into());
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidInputLength(data.len()));
        }
        let chain = self.chain_start()?;
        log::trace!("decode {} bytes, mode {}, padding {}", data.len(), self.mode, self.padding);

        let decrypted = match chain {
            None => self.process_ecb(&data, Direction::Decrypt),
            Some(iv) => self.decrypt_cbc(&data, iv),
        };
        Ok(self.output(remove_padding(decrypted, self.padding)))
    }

    /// `None` for ECB, the packed IV for CBC.
    fn chain_start(&self) -> Result<Option<(u32, u32)>, CipherError> {
        match self.mode {
            CipherMode::ECB => Ok(None),
            CipherMode::CBC => {
                if self.iv.len() != BLOCK_SIZE {
                    return Err(CipherError::InvalidIv(self.iv.len()));
                }
                Ok(Some(block_to_halves(&self.iv)))
            }
        }
    }

    fn input_bytes(&self, input: CipherInput) -> Vec<u8> {
        match input {
            CipherInput::Bytes(bytes) => bytes,
            CipherInput::Text(text) => self.codec.encode(&text),
        }
    }

    fn output(&self, bytes: Vec<u8>) -> CipherOutput {
        match self.return_type {
            ReturnType::Bytes => CipherOutput::Bytes(bytes),
            ReturnType::String => CipherOutput::Text(self.codec.decode(&bytes)),
        }
    }

    fn process_ecb(&self, data: &[u8], direction: Direction) -> Vec<u8> {
        if data.len() < PARALLEL_THRESHOLD {
            return self.process_ecb_blocks(data, direction);
        }

        log::trace!(
            "ECB over {} bytes on {} threads",
            data.len(),
            rayon::current_num_threads()
        );
        data.par_chunks(PARALLEL_CHUNK_SIZE)
            .map(|chunk| self.process_ecb_blocks(chunk, direction))
            .collect::<Vec<_>>()
            .concat()
    }

    fn process_ecb_blocks(&self, data: &[u8], direction: Direction) -> Vec<u8> {
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks_exact(BLOCK_SIZE) {
            let (left, right) = block_to_halves(block);
            let (left, right) = match direction {
                Direction::Encrypt => self.algorithm.encrypt_block(left, right),
                Direction::Decrypt => self.algorithm.decrypt_block(left, right),
            };
            result.extend_from_slice(&halves_to_block(left, right));
        }
        result
    }

    fn encrypt_cbc(&self, data: &[u8], iv: (u32, u32)) -> Vec<u8> {
        let (mut prev_left, mut prev_right) = iv;
        let mut result = Vec::with_capacity(data.len());

        for block in data.chunks_exact(BLOCK_SIZE) {
            let (left, right) = block_to_halves(block);
            let (left, right) = self
                .algorithm
                .encrypt_block(xor32(prev_left, left), xor32(prev_right, right));
            prev_left = left;
            prev_right = right;
            result.extend_from_slice(&halves_to_block(left, right));
        }
        result
    }

    fn decrypt_cbc(&self, data: &[u8], iv: (u32, u32)) -> Vec<u8> {
        let (mut prev_left, mut prev_right) = iv;
        let mut result = Vec::with_capacity(data.len());

        for block in data.chunks_exact(BLOCK_SIZE) {
            let (cipher_left, cipher_right) = block_to_halves(block);
            let (left, right) = self.algorithm.decrypt_block(cipher_left, cipher_right);
            result.extend_from_slice(&halves_to_block(
                xor32(prev_left, left),
                xor32(prev_right, right),
            ));
            // chain on ciphertext, not on the recovered plaintext
            prev_left = cipher_left;
            prev_right = cipher_right;
        }
        result
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("return_type", &self.return_type)
            .field("iv_len", &self.iv.len())
            .finish_non_exhaustive()
    }
}
