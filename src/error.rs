use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("key file `{path}` not found")]
    KeyNotFound { path: PathBuf },

    #[error("key file `{path}` is truncated or malformed")]
    BadKeyFile { path: PathBuf },
}
