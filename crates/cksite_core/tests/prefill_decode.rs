use cksite_core::decode_message;

#[test]
fn absent_or_empty_gives_empty_text() {
    assert_eq!(decode_message(None), "");
    assert_eq!(decode_message(Some("")), "");
}

#[test]
fn plain_text_passes_through_unchanged() {
    assert_eq!(decode_message(Some("hello world")), "hello world");
    assert_eq!(decode_message(Some("안녕하세요")), "안녕하세요");
}

#[test]
fn crlf_pairs_normalize_to_lf() {
    assert_eq!(decode_message(Some("a\r\nb\r\nc")), "a\nb\nc");
}

#[test]
fn plus_repairs_to_space() {
    assert_eq!(decode_message(Some("a+b")), "a b");
}

#[test]
fn single_encoded_text_decodes() {
    assert_eq!(
        decode_message(Some("line1%0Aline2%20end")),
        "line1\nline2 end"
    );
}

#[test]
fn double_encoded_text_unwraps_fully() {
    // encodeURIComponent applied twice to "hello world\nbye".
    assert_eq!(
        decode_message(Some("hello%2520world%250Abye")),
        "hello world\nbye"
    );
}

#[test]
fn encoded_crlf_still_normalizes() {
    assert_eq!(decode_message(Some("a%0D%0Ab")), "a\nb");
}

#[test]
fn malformed_escape_keeps_text_untouched() {
    assert_eq!(decode_message(Some("100% sure")), "100% sure");
    assert_eq!(decode_message(Some("50%")), "50%");
}

#[test]
fn invalid_utf8_escape_keeps_text_untouched() {
    // 0xE0 alone is not valid UTF-8; the whole pass is abandoned.
    assert_eq!(decode_message(Some("broken %E0 byte")), "broken %E0 byte");
}

#[test]
fn literal_percent_sequence_is_eagerly_unwrapped() {
    // A user who literally typed "%20" arrives single-encoded as "%2520"
    // and gets unwrapped twice. Best-effort behavior, kept on purpose.
    assert_eq!(decode_message(Some("%2520")), " ");
}
