/// Computes the MD5 digest of `input` and returns it as 32 lowercase hex characters
pub fn md5_hex(input: &[u8]) -> String {
    format!("{:x}", md5::compute(input))
}
