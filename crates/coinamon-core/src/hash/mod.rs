//! Shortcuts to the hash functions used by the Bitcoin protocol.
//!
//! Provides plain SHA-256 and RIPEMD-160 plus the two compound hashes the
//! protocol is built on: `hash256` (double SHA-256, used for transaction
//! IDs, block hashes, and Base58Check checksums) and `hash160`
//! (RIPEMD-160 of SHA-256, used for address payloads).
//!
//! These are deterministic pass-throughs over the `sha2` and `ripemd`
//! crates; no hash algorithm is implemented here.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the RIPEMD-160 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Bitcoin 256-bit hash: SHA-256 applied twice.
///
/// The first 4 bytes of this digest form the Base58Check checksum.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute the Bitcoin 160-bit hash: RIPEMD-160 of SHA-256.
///
/// Used to derive address payloads from serialized public keys.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte Hash160 digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipisicing elit, \
sed doeiusmod tempor incididunt ut labore.";

    #[test]
    fn test_sha256() {
        assert_eq!(
            hex::encode(sha256(DATA)),
            "8ea0797d87adb082280adb9beaf4ce1eee5c32602616a7f2f09781d74074bdf0"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_ripemd160() {
        assert_eq!(
            hex::encode(ripemd160(DATA)),
            "adcc4acaf5cd1df442ba39dd358252ecf74873bc"
        );
    }

    #[test]
    fn test_ripemd160_empty() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }

    #[test]
    fn test_hash256() {
        assert_eq!(
            hex::encode(hash256(DATA)),
            "7d3e7c52a90baf4db264d8ef710e30fd541c03408c66c44e995c526e55b54481"
        );
    }

    #[test]
    fn test_hash256_empty() {
        assert_eq!(
            hex::encode(hash256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_hash160() {
        assert_eq!(
            hex::encode(hash160(DATA)),
            "dd93da718a7b4d60a2919f10cbcd326f612a5a88"
        );
    }

    #[test]
    fn test_hash160_empty() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }
}
