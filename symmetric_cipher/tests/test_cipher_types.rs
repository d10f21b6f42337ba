#[cfg(test)]
mod tests {
    use symmetric_cipher::{CipherError, CipherInput, CipherMode, CipherOutput, PaddingMode, ReturnType};

    #[test]
    fn test_defaults() {
        assert_eq!(CipherMode::default(), CipherMode::ECB);
        assert_eq!(PaddingMode::default(), PaddingMode::PKCS5);
        assert_eq!(ReturnType::default(), ReturnType::Bytes);
    }

    #[test]
    fn test_names_roundtrip_through_display() {
        for mode in [CipherMode::ECB, CipherMode::CBC] {
            assert_eq!(mode.to_string().parse::<CipherMode>(), Ok(mode));
        }
        for padding in [
            PaddingMode::PKCS5,
            PaddingMode::OneAndZeros,
            PaddingMode::LastByte,
            PaddingMode::Null,
            PaddingMode::Spaces,
        ] {
            assert_eq!(padding.to_string().parse::<PaddingMode>(), Ok(padding));
        }
        for return_type in [ReturnType::String, ReturnType::Bytes] {
            assert_eq!(return_type.to_string().parse::<ReturnType>(), Ok(return_type));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("cbc".parse::<CipherMode>(), Ok(CipherMode::CBC));
        assert_eq!("One_And_Zeros".parse::<PaddingMode>(), Ok(PaddingMode::OneAndZeros));
        assert_eq!("last_byte".parse::<PaddingMode>(), Ok(PaddingMode::LastByte));
        assert_eq!("Bytes".parse::<ReturnType>(), Ok(ReturnType::Bytes));
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!("CTR".parse::<CipherMode>(), Err(CipherError::InvalidMode("CTR".into())));
        assert_eq!(
            "PKCS7".parse::<PaddingMode>(),
            Err(CipherError::InvalidPadding("PKCS7".into()))
        );
        assert_eq!(
            "hex".parse::<ReturnType>(),
            Err(CipherError::InvalidReturnType("hex".into()))
        );
        assert_eq!("".parse::<CipherMode>(), Err(CipherError::InvalidMode(String::new())));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CipherError::InvalidIv(5).to_string(), "IV must be exactly 8 bytes, got 5");
        assert_eq!(
            CipherError::InvalidInputLength(7).to_string(),
            "input length 7 is not a multiple of 8"
        );
        assert_eq!(CipherError::InvalidMode("OFB".into()).to_string(), "unsupported cipher mode: OFB");
    }

    #[test]
    fn test_input_conversions() {
        assert_eq!(CipherInput::from("abc"), CipherInput::Text("abc".to_string()));
        assert_eq!(CipherInput::from(String::from("abc")), CipherInput::Text("abc".to_string()));
        assert_eq!(CipherInput::from(b"abc"), CipherInput::Bytes(vec![97, 98, 99]));
        assert_eq!(CipherInput::from([1u8, 2]), CipherInput::Bytes(vec![1, 2]));
        assert_eq!(CipherInput::from(&[1u8, 2][..]), CipherInput::Bytes(vec![1, 2]));
        assert_eq!(CipherInput::from(vec![3u8]), CipherInput::Bytes(vec![3]));
    }

    #[test]
    fn test_output_views() {
        let bytes = CipherOutput::Bytes(vec![104, 105]);
        assert_eq!(bytes.as_bytes(), b"hi");
        assert_eq!(bytes.as_text(), None);

        let text = CipherOutput::Text("hi".to_string());
        assert_eq!(text.as_bytes(), b"hi");
        assert_eq!(text.as_text(), Some("hi"));
        assert_eq!(text.into_bytes(), b"hi".to_vec());
    }
}
