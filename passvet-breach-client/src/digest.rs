use std::fmt;

use sha1::{Digest, Sha1};

use crate::{DIGEST_LEN, PREFIX_LEN};

/// Hex lookup table for digest rendering.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// SHA-1 digest of a password, rendered as 40 uppercase hex characters and
/// kept on the stack.
///
/// The digest splits into the [`prefix`](Self::prefix) sent to the range
/// endpoint and the [`suffix`](Self::suffix) that is only ever compared
/// locally. `prefix().len() + suffix().len() == DIGEST_LEN` always holds, and
/// the two concatenate back to the full rendering.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest {
    hex: [u8; DIGEST_LEN],
}

impl PasswordDigest {
    /// Hashes `password` and renders the digest as uppercase hex with no
    /// separators. Deterministic: the same password always produces the same
    /// digest.
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let hash: [u8; 20] = hasher.finalize().into();

        let mut hex = [0u8; DIGEST_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }

        Self { hex }
    }

    /// Full 40-character hex rendering.
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds ASCII characters from HEX_CHARS.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// First 5 hex characters. The only part of the digest that leaves the
    /// process.
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters, matched against response records locally.
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }
}

impl fmt::Debug for PasswordDigest {
    /// Prints the range prefix only. The full digest stays out of logs and
    /// error output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}..)", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn renders_known_sha1_vector() {
        // password123 -> SHA1: CBFDAC6008F9CAB4083784CBD1874F76618D2A97
        let digest = PasswordDigest::of("password123");
        assert_eq!(digest.as_str(), "CBFDAC6008F9CAB4083784CBD1874F76618D2A97");
    }

    #[test]
    fn rendering_matches_raw_hash_bytes() {
        let raw = Sha1::digest(b"password123");
        assert_eq!(
            raw.as_slice(),
            hex!("CBFDAC6008F9CAB4083784CBD1874F76618D2A97")
        );
    }

    #[test]
    fn splits_prefix_and_suffix() {
        let digest = PasswordDigest::of("password123");
        assert_eq!(digest.prefix(), "CBFDA");
        assert_eq!(digest.suffix(), "C6008F9CAB4083784CBD1874F76618D2A97");
    }

    #[test]
    fn prefix_and_suffix_recompose_digest() {
        for password in ["12345678", "P@ssw0rd!", "hAwT?}cuC:r#kW5"] {
            let digest = PasswordDigest::of(password);
            assert_eq!(digest.prefix().len(), PREFIX_LEN);
            assert_eq!(digest.suffix().len(), DIGEST_LEN - PREFIX_LEN);
            let recomposed = format!("{}{}", digest.prefix(), digest.suffix());
            assert_eq!(recomposed, digest.as_str());
        }
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(
            PasswordDigest::of("12345678"),
            PasswordDigest::of("12345678")
        );
        // Known suffix used by the range protocol for this password.
        assert_eq!(
            PasswordDigest::of("12345678").suffix(),
            "FB2927D828AF22F592134E8932480637C0D"
        );
    }

    #[test]
    fn debug_output_hides_the_tail() {
        let digest = PasswordDigest::of("password123");
        let rendered = format!("{digest:?}");
        assert!(rendered.contains("CBFDA"));
        assert!(!rendered.contains(digest.suffix()));
    }
}
