use super::*;

fn token_with_payload(payload: &str) -> String {
    format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn role_claim_reads_numeric_role() {
    assert_eq!(role_claim(&token_with_payload(r#"{"role":1,"sub":"7"}"#)), Some(1));
    assert_eq!(role_claim(&token_with_payload(r#"{"role":2}"#)), Some(2));
}

#[test]
fn role_claim_accepts_padded_payloads() {
    // Some encoders keep the trailing '=' padding.
    assert_eq!(role_claim("hdr.eyJyb2xlIjoxfQ==.sig"), Some(1));
}

#[test]
fn role_claim_absent_when_payload_has_no_role() {
    assert_eq!(role_claim(&token_with_payload(r#"{"sub":"7"}"#)), None);
}

#[test]
fn role_claim_absent_for_non_numeric_role() {
    assert_eq!(role_claim(&token_with_payload(r#"{"role":"admin"}"#)), None);
}

#[test]
fn malformed_tokens_decode_to_nothing() {
    assert_eq!(decode_payload(""), None);
    assert_eq!(decode_payload("no-dots-here"), None);
    assert_eq!(decode_payload("a.%%%.c"), None);
    assert_eq!(decode_payload(&format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode("not json"))), None);
}
