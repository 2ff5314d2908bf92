// Content addressing. The digest is always computed over the full encoded
// envelope, never the raw payload, so the kind participates in the address.

use std::fmt;
use std::str::FromStr;

use sha1::{Digest as _, Sha1};

pub const DIGEST_LEN: usize = 20;

/// A 20-byte SHA-1 digest, the store's addressing key. Rendered as lowercase
/// hex everywhere it crosses the system boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid digest {0:?}: expected 40 hex characters")]
pub struct ParseDigestError(String);

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| ParseDigestError(s.to_string()))?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::Digest;

    #[test]
    fn known_blob_digest() {
        // SHA-1 of the envelope "blob 11\x00hello world"
        let digest = Digest::of(b"blob 11\x00hello world");
        assert_eq!(digest.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");
    }

    #[test]
    fn known_empty_blob_digest() {
        let digest = Digest::of(b"blob 0\x00");
        assert_eq!(digest.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
    }

    #[test]
    fn hashing_is_deterministic() {
        let input = b"tag 5\x00hello";
        assert_eq!(Digest::of(input), Digest::of(input));
    }

    #[test]
    fn kind_participates_in_addressing() {
        assert_ne!(
            Digest::of(b"blob 11\x00hello world"),
            Digest::of(b"commit 11\x00hello world"),
        );
    }

    #[test]
    fn parses_back_from_hex() {
        let digest = Digest::of(b"blob 0\x00");
        let parsed: Digest = digest.to_hex().parse().unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn rejects_bad_hex() {
        assert!("not a digest".parse::<Digest>().is_err());
        assert!("95d09f2b".parse::<Digest>().is_err());
        assert!(
            "zzd09f2b10159347eece71399a7e2e907ea3df4f"
                .parse::<Digest>()
                .is_err()
        );
    }
}
