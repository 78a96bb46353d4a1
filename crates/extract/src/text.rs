/// Decodes plain-text bytes into a `String`.
///
/// A UTF-8 or UTF-16 byte order mark decides the encoding when present.
/// Otherwise the bytes are read as UTF-8, and if that fails as Windows-1252,
/// which maps every byte and so always succeeds.
pub fn decode_text(input: &[u8]) -> String {
    if let Some(rest) = input.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(rest).into_owned();
    }
    if input.starts_with(&[0xFF, 0xFE]) {
        let (result, _, _) = encoding_rs::UTF_16LE.decode(input);
        return result.into_owned();
    }
    if input.starts_with(&[0xFE, 0xFF]) {
        let (result, _, _) = encoding_rs::UTF_16BE.decode(input);
        return result.into_owned();
    }

    match std::str::from_utf8(input) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (result, _, _) = encoding_rs::WINDOWS_1252.decode(input);
            result.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_text() {
        assert_eq!(decode_text("Hello, World!\nनमस्ते".as_bytes()), "Hello, World!\nनमस्ते");
        assert_eq!(decode_text(b""), "");
    }

    #[test]
    fn test_utf8_bom() {
        let mut input = vec![0xEF, 0xBB, 0xBF];
        input.extend_from_slice("Agenda".as_bytes());
        assert_eq!(decode_text(&input), "Agenda");
    }

    #[test]
    fn test_utf16le_bom() {
        let input = [0xFF, 0xFE, b'H', 0, b'i', 0];
        assert_eq!(decode_text(&input), "Hi");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0x93/0x94 are curly quotes in Windows-1252 and invalid UTF-8
        assert_eq!(decode_text(&[0x93, b'o', b'k', 0x94]), "\u{201C}ok\u{201D}");
    }
}
