use clap::ValueEnum;

pub const RSA_BLOCK: usize = 128;
pub const DES_BLOCK: usize = 8;
pub const SHA_BLOCK: usize = 32;
pub const SIGN_BLOCK: usize = 128;
pub const AES_BLOCK: usize = 16;

/// The closed algorithm set of the toolkit. Every variant carries its own
/// block size and output naming; selection happens once at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Algorithm {
    #[value(name = "rsa")]
    Rsa,
    #[value(name = "des")]
    Des,
    #[value(name = "sha")]
    Sha,
    #[value(name = "sign")]
    Sign,
    #[value(name = "aes")]
    Aes,
}

impl Algorithm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rsa => "rsa",
            Self::Des => "des",
            Self::Sha => "sha",
            Self::Sign => "sign",
            Self::Aes => "aes",
        }
    }

    /// Unit the input is chunked into; the driver zero-pads the input to a
    /// multiple of it. For `sha` this is the digest size and the input is
    /// hashed at its true length.
    pub const fn block_size(self) -> usize {
        match self {
            Self::Rsa => RSA_BLOCK,
            Self::Des => DES_BLOCK,
            Self::Sha => SHA_BLOCK,
            Self::Sign => SIGN_BLOCK,
            Self::Aes => AES_BLOCK,
        }
    }

    /// Extension of the default output path when `-o` is not given.
    pub const fn output_ext(self, decrypt: bool) -> &'static str {
        if decrypt {
            return "dec";
        }
        match self {
            Self::Sign => "sgn",
            Self::Sha => "sha256",
            _ => "enc",
        }
    }
}
