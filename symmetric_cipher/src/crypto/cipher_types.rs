use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

/// Block size, in bytes, of every cipher driven by `CipherContext`.
pub const BLOCK_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherMode {
    #[default]
    ECB,
    CBC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingMode {
    /// `n` bytes of value `n`.
    #[default]
    PKCS5,
    /// `0x80` followed by zeros.
    OneAndZeros,
    /// Zeros followed by one byte holding the pad length.
    LastByte,
    /// Zero bytes.
    Null,
    /// `0x20` bytes.
    Spaces,
}

/// Representation of the value returned by `encode` / `decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReturnType {
    String,
    #[default]
    Bytes,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
        };
        f.pad(name)
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::ECB),
            "CBC" => Ok(CipherMode::CBC),
            _ => Err(CipherError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingMode::PKCS5 => "PKCS5",
            PaddingMode::OneAndZeros => "ONE_AND_ZEROS",
            PaddingMode::LastByte => "LAST_BYTE",
            PaddingMode::Null => "NULL",
            PaddingMode::Spaces => "SPACES",
        };
        f.pad(name)
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PKCS5" => Ok(PaddingMode::PKCS5),
            "ONE_AND_ZEROS" => Ok(PaddingMode::OneAndZeros),
            "LAST_BYTE" => Ok(PaddingMode::LastByte),
            "NULL" => Ok(PaddingMode::Null),
            "SPACES" => Ok(PaddingMode::Spaces),
            _ => Err(CipherError::InvalidPadding(s.to_string())),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReturnType::String => "STRING",
            ReturnType::Bytes => "BYTES",
        };
        f.pad(name)
    }
}

impl FromStr for ReturnType {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STRING" => Ok(ReturnType::String),
            "BYTES" => Ok(ReturnType::Bytes),
            _ => Err(CipherError::InvalidReturnType(s.to_string())),
        }
    }
}

/// A key, IV or payload handed to the cipher: raw bytes or text.
///
/// Text is turned into bytes by the context's `TextCodec`. Anything that is
/// neither has no conversion into `CipherInput` and is rejected by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherInput {
    Bytes(Vec<u8>),
    Text(String),
}

impl From<Vec<u8>> for CipherInput {
    fn from(bytes: Vec<u8>) -> Self {
        CipherInput::Bytes(bytes)
    }
}

impl From<&[u8]> for CipherInput {
    fn from(bytes: &[u8]) -> Self {
        CipherInput::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for CipherInput {
    fn from(bytes: [u8; N]) -> Self {
        CipherInput::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for CipherInput {
    fn from(bytes: &[u8; N]) -> Self {
        CipherInput::Bytes(bytes.to_vec())
    }
}

impl From<String> for CipherInput {
    fn from(text: String) -> Self {
        CipherInput::Text(text)
    }
}

impl From<&str> for CipherInput {
    fn from(text: &str) -> Self {
        CipherInput::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherOutput {
    Bytes(Vec<u8>),
    Text(String),
}

impl CipherOutput {
    /// Bytes view of the output. Text is exposed as its UTF-8 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            CipherOutput::Bytes(bytes) => bytes,
            CipherOutput::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CipherOutput::Bytes(bytes) => bytes,
            CipherOutput::Text(text) => text.into_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CipherOutput::Text(text) => Some(text),
            CipherOutput::Bytes(_) => None,
        }
    }
}
