/// Builds the `otpauth://` URI scanned by authenticator apps.
///
/// Neither `label` nor `secret` is percent-encoded, matching the format already
/// handed out to enrolled users. A label containing `?`, `#`, `&` or spaces
/// yields a URI that scanners may misread.
pub fn provisioning_uri(label: &str, secret: &str) -> String {
    format!("otpauth://totp/{}?secret={}", label, secret)
}
