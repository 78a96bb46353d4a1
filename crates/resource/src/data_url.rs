use base64::Engine;
use eventdoc_traits::ResourceError;

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Lower-cased media type from the header, if one was given.
    pub mime: Option<String>,
    pub data: Vec<u8>,
}

/// Decodes a `data:[<mime>][;base64],<payload>` string. The scheme is
/// matched without regard to case.
///
/// Base64 payloads may contain whitespace (line-wrapped exports); it is
/// stripped before decoding. Non-base64 payloads are percent-decoded.
pub fn parse_data_url(uri: &str) -> Result<DataUrl, ResourceError> {
    let uri = uri.trim_start();
    let rest = uri
        .get(..5)
        .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
        .map(|_| &uri[5..])
        .ok_or_else(|| ResourceError::InvalidEncoding("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ResourceError::InvalidEncoding("data URL has no payload".to_string()))?;

    let mime = header
        .split(';')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_ascii_lowercase);

    let is_base64 = header
        .split(';')
        .skip(1)
        .any(|param| param.trim().eq_ignore_ascii_case("base64"));

    let data = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| ResourceError::InvalidEncoding(e.to_string()))?
    } else {
        decode_percent_encoded_bytes(payload)?
    };

    Ok(DataUrl { mime, data })
}

fn decode_percent_encoded_bytes(input: &str) -> Result<Vec<u8>, ResourceError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(|| {
                        ResourceError::InvalidEncoding(format!("bad percent escape at offset {i}"))
                    })?;
                out.push(hex);
                i += 3;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    Ok(out)
}
