//! Blowfish block cipher with ECB / CBC chaining and five padding schemes.
//!
//! ```
//! use blowfish::{CipherMode, PaddingMode, ReturnType};
//!
//! let mut bf = blowfish::cipher("a secret key", CipherMode::CBC, PaddingMode::PKCS5).unwrap();
//! bf.set_iv("abcdefgh").unwrap();
//!
//! let encoded = bf.encode("attack at dawn").unwrap();
//! assert_eq!(encoded.as_bytes().len(), 16);
//!
//! bf.set_return_type(ReturnType::String);
//! let decoded = bf.decode(encoded.into_bytes()).unwrap();
//! assert_eq!(decoded.as_text(), Some("attack at dawn"));
//! ```
//!
//! Keys, IVs and payloads must be bytes or text:
//!
//! ```compile_fail
//! use blowfish::{CipherMode, PaddingMode};
//!
//! let bf = blowfish::cipher(42, CipherMode::ECB, PaddingMode::PKCS5);
//! ```

pub mod crypto;

pub use crypto::blowfish::Blowfish;
pub use symmetric_cipher::{
    CipherContext, CipherError, CipherInput, CipherMode, CipherOutput, PaddingMode, ReturnType,
    TextCodec, Utf8Codec,
};

/// Creates a Blowfish cipher keyed with `key`.
///
/// Text keys are converted with the default UTF-8 codec. Use
/// `CipherMode::default()` / `PaddingMode::default()` for ECB with PKCS5.
///
/// # Errors
/// [`CipherError::InvalidKey`] when `key` has no bytes.
pub fn cipher(
    key: impl Into<CipherInput>,
    mode: CipherMode,
    padding: PaddingMode,
) -> Result<CipherContext, CipherError> {
    let mut context = CipherContext::new(Box::new(Blowfish::default()), mode, padding);
    context.set_key(key)?;
    Ok(context)
}
