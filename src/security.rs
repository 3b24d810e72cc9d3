use subtle::ConstantTimeEq;

/// Compare the skill secret header against the configured secret without
/// leaking how many leading bytes matched.
///
/// # Returns
/// `true` only for equal-length, byte-identical strings.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check a caller-supplied secret against the configured one.
///
/// No configured secret means the endpoint is open.
pub fn verify_secret(expected: Option<&str>, provided: Option<&str>) -> bool {
    match (expected, provided) {
        (None, _) => true,
        (Some(expected), Some(provided)) => constant_time_compare(expected, provided),
        (Some(_), None) => false,
    }
}
