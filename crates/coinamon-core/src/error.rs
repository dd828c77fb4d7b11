/// Unified error type for all codec operations.
///
/// Covers errors from Base58 text decoding, checksum verification, and
/// bounds-checked binary reads.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("character {0:?} is not in the Base58 alphabet")]
    InvalidCharacter(char),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("read of {needed} bytes exceeds the {remaining} bytes remaining")]
    OutOfBounds { needed: usize, remaining: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}
