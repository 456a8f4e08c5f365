use percent_encoding::percent_decode_str;

/// Encoded-space sequence substituted for literal plus signs before the
/// decode passes run.
const ENCODED_SPACE: &str = "%20";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeError {
    /// A `%` not followed by two hex digits.
    MalformedEscape,
    /// The decoded bytes were not valid UTF-8.
    InvalidUtf8,
}

/// Turn the raw recovered `msg` parameter into clean display text.
///
/// Link-sharing intermediaries mangle the parameter in two known ways:
/// encoded spaces arrive as literal `+`, and some redirects re-encode the
/// whole value. Repair the plus signs, run up to two tolerant decode
/// passes, then normalize CRLF line endings. The pipeline never fails;
/// text it cannot decode passes through unchanged.
pub fn decode_message(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }

    let mut text = if raw.contains('+') {
        raw.replace('+', ENCODED_SPACE)
    } else {
        raw.to_owned()
    };

    // First pass, then a second one to unwrap double-encoded values.
    for _ in 0..2 {
        if let Ok(decoded) = try_decode_pass(&text) {
            text = decoded;
        }
    }

    text.replace("\r\n", "\n")
}

/// One all-or-nothing percent-decode pass.
///
/// A single malformed escape anywhere fails the whole pass and the caller
/// keeps its text untouched; decoding only the well-formed escapes would
/// garble a message the author never encoded.
fn try_decode_pass(text: &str) -> Result<String, DecodeError> {
    if !text.contains('%') {
        return Ok(text.to_owned());
    }
    validate_escapes(text)?;
    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

fn validate_escapes(text: &str) -> Result<(), DecodeError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(DecodeError::MalformedEscape);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
