/// Compares two strings without returning early on the first differing byte.
///
/// Differing lengths return `false` straight away. That leaks the length only,
/// which is public for fixed-width codes.
pub fn timing_safe_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}
