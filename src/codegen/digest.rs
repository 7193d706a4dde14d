//! SHA-1 digest and the fold into a 64-bit identifier

use crate::error::{Error, Result};
use sha1::{Digest, Sha1};

/// Source of the message digest applied to the canonical encoding
pub trait DigestProvider {
    /// Algorithm name, for diagnostics
    fn algorithm(&self) -> &str;

    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// The digest the JVM uses ("SHA")
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1Provider;

impl DigestProvider for Sha1Provider {
    fn algorithm(&self) -> &str {
        "SHA-1"
    }

    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(Sha1::digest(bytes).to_vec())
    }
}

/// Fold the first eight digest bytes: byte 7 becomes the most significant
/// byte of the result, byte 0 the least significant.
pub fn fold_digest(digest: &[u8]) -> Result<i64> {
    let head: [u8; 8] = digest
        .get(..8)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| Error::digest_unavailable(format!("digest too short: {} bytes", digest.len())))?;
    let mut hash: i64 = 0;
    for &b in head.iter().rev() {
        hash = (hash << 8) | i64::from(b);
    }
    Ok(hash)
}

/// Hash with `provider` and fold
pub fn fold_with(bytes: &[u8], provider: &dyn DigestProvider) -> Result<i64> {
    let digest = provider.digest(bytes)?;
    log::trace!("{} digest of {} bytes", provider.algorithm(), bytes.len());
    fold_digest(&digest)
}

/// Hash with SHA-1 and fold
pub fn fold(bytes: &[u8]) -> Result<i64> {
    fold_with(bytes, &Sha1Provider)
}
