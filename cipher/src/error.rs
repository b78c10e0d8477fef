use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    InvalidBlockSize { target: usize, real: usize },

    InvalidKeySize { target: usize, real: usize },

    /// A block's integer value does not fit the fixed block width, or reaches
    /// the modulus.
    EncodingOverflow { width: usize, bits: u64 },

    /// Loaded key material failed the round-trip probe.
    InvalidKey(String),
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBlockSize { target, real } => f.write_fmt(format_args!(
                "Invalid block data size `{real}` not match to target size `{target}`"
            )),
            Self::InvalidKeySize { target, real } => f.write_fmt(format_args!(
                "Invalid key size `{real}` not match to target size `{target}`"
            )),
            Self::EncodingOverflow { width, bits } => f.write_fmt(format_args!(
                "`{bits}`-bits block value overflows the `{width}`-bytes block width"
            )),
            Self::InvalidKey(s) => f.write_fmt(format_args!("Invalid key: {s}")),
        }
    }
}

impl Error for CipherError {}
