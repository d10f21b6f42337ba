/// Converts between text and bytes at the cipher boundary.
///
/// The block transforms never see text; `CipherContext` calls the codec when
/// a key, IV or payload arrives as `CipherInput::Text`, and when the output is
/// requested as `ReturnType::String`.
pub trait TextCodec {
    fn encode(&self, text: &str) -> Vec<u8>;
    fn decode(&self, bytes: &[u8]) -> String;
}

/// UTF-8 codec. Invalid sequences decode to U+FFFD instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Codec;

impl TextCodec for Utf8Codec {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
