use super::hash::md5_hex;

/// Number of hex characters kept from the digest
pub const SHORT_ID_LENGTH: usize = 8;

/// Derives the short ID for a URL from the leading hex characters of its MD5 digest.
///
/// The result only depends on the bytes of `original_url`, so shortening the same
/// URL twice yields the same ID. No validation is done: any string, the empty one
/// included, gets an ID. Distinct URLs sharing the same 8-character prefix collide.
pub fn generate_short_id(original_url: &str) -> String {
    let mut digest = md5_hex(original_url.as_bytes());
    digest.truncate(SHORT_ID_LENGTH);
    digest
}
