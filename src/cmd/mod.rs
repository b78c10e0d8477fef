mod algo;
pub use algo::Algorithm;

mod args;
pub use args::cli;

mod keyfile;
mod report;
use report::Report;

use crate::error::Error;
use anyhow::Context;
use cipher::rsa::PrivateKey;
use cipher::{Decrypt, DefaultRand, Encrypt, Rand, AES128, DES};
use clap::ArgMatches;
use crypto_hash::sha2::SHA256;
use crypto_hash::Digest;
use log::info;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use utils::Block;

pub const DEFAULT_KEY_FILENAME: &str = "default.key";
/// Bit length of each secret prime; the modulus spans twice that, one RSA
/// block.
pub const RSA_PRIME_BITS: usize = 512;

pub fn run(m: &ArgMatches) -> anyhow::Result<()> {
    let algo = *m.get_one::<Algorithm>("algo").expect("algo is required");
    let decrypt = m.get_flag("decrypt");
    let has_key = m.get_one::<PathBuf>("key").is_some();
    let key_path = m
        .get_one::<PathBuf>("key")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_FILENAME));

    if m.get_flag("generate-key") {
        return generate_key(algo, &key_path, prime_seed(m));
    }

    let input = m
        .get_one::<PathBuf>("input")
        .cloned()
        .expect("input is required");
    let output = m
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| default_output(&input, algo, decrypt));

    if (decrypt || algo == Algorithm::Sign) && !key_path.exists() {
        return Err(Error::KeyNotFound { path: key_path }.into());
    }

    let data = std::fs::read(&input)
        .with_context(|| format!("read input `{}`", input.display()))?;
    let size = if algo == Algorithm::Sha {
        data.len()
    } else {
        padded_size(data.len(), algo.block_size())
    };

    let (mut out, elapsed) = match algo {
        Algorithm::Sha => {
            let t = Instant::now();
            (SHA256::digest(data.as_slice()), t.elapsed())
        }
        Algorithm::Rsa | Algorithm::Sign => {
            rsa_file(algo, data.as_slice(), &key_path, has_key, decrypt, m)?
        }
        Algorithm::Aes => aes_file(data.as_slice(), &key_path, has_key, decrypt)?,
        Algorithm::Des => des_file(data.as_slice(), &key_path, has_key, decrypt)?,
    };

    if decrypt && algo != Algorithm::Sha {
        trim_trailing_zeros(&mut out);
    }
    std::fs::write(&output, out.as_slice())
        .with_context(|| format!("write output `{}`", output.display()))?;

    println!(
        "{}",
        Report {
            algo: algo.name(),
            decrypt,
            input: &input,
            output: &output,
            size,
            elapsed,
        }
    );
    Ok(())
}

/// `-g`: generate a key, save it, do nothing else.
fn generate_key(algo: Algorithm, key_path: &Path, seed: u64) -> anyhow::Result<()> {
    match algo {
        Algorithm::Rsa => {
            let key = PrivateKey::generate(RSA_PRIME_BITS, seed);
            keyfile::save_rsa(&key, key_path)?;
        }
        Algorithm::Aes => {
            let mut key = [0u8; AES128::KEY_SIZE];
            DefaultRand.rand(&mut key);
            keyfile::save_symmetric(&key, key_path)?;
        }
        Algorithm::Des => {
            let mut key = [0u8; DES::KEY_SIZE];
            DefaultRand.rand(&mut key);
            keyfile::save_symmetric(&key, key_path)?;
        }
        Algorithm::Sha | Algorithm::Sign => {
            log::warn!("`{}` has no key material to generate", algo.name());
            return Ok(());
        }
    }
    info!("{} key saved to `{}`", algo.name(), key_path.display());
    Ok(())
}

fn rsa_file(
    algo: Algorithm,
    data: &[u8],
    key_path: &Path,
    has_key: bool,
    decrypt: bool,
    m: &ArgMatches,
) -> anyhow::Result<(Vec<u8>, Duration)> {
    // signing is decryption applied to the plaintext
    let use_private = decrypt || algo == Algorithm::Sign;
    let key = if use_private || has_key {
        keyfile::load_rsa(key_path)?
    } else {
        let key = PrivateKey::generate(RSA_PRIME_BITS, prime_seed(m));
        keyfile::save_rsa(&key, key_path)?;
        info!("fresh rsa key saved to `{}`", key_path.display());
        key
    };

    let buf = pad_to_block(data, algo.block_size());
    let t = Instant::now();
    let mut out = Vec::with_capacity(buf.len());
    if use_private {
        key.decrypt(&buf, &mut out)?;
    } else {
        key.public_key().encrypt(&buf, &mut out)?;
    }
    Ok((out, t.elapsed()))
}

fn aes_file(
    data: &[u8],
    key_path: &Path,
    has_key: bool,
    decrypt: bool,
) -> anyhow::Result<(Vec<u8>, Duration)> {
    let key = if decrypt || has_key {
        keyfile::load_symmetric::<{ AES128::KEY_SIZE }>(key_path)?
    } else {
        let mut key = [0u8; AES128::KEY_SIZE];
        DefaultRand.rand(&mut key);
        keyfile::save_symmetric(&key, key_path)?;
        info!("fresh aes key saved to `{}`", key_path.display());
        key
    };
    let aes = AES128::new(key);

    let buf = pad_to_block(data, AES128::BLOCK_SIZE);
    let t = Instant::now();
    let mut out = Vec::with_capacity(buf.len());
    if decrypt {
        aes.decrypt(&buf, &mut out)?;
    } else {
        aes.encrypt(&buf, &mut out)?;
    }
    Ok((out, t.elapsed()))
}

fn des_file(
    data: &[u8],
    key_path: &Path,
    has_key: bool,
    decrypt: bool,
) -> anyhow::Result<(Vec<u8>, Duration)> {
    let key = if decrypt || has_key {
        keyfile::load_symmetric::<{ DES::KEY_SIZE }>(key_path)?
    } else {
        let mut key = [0u8; DES::KEY_SIZE];
        DefaultRand.rand(&mut key);
        keyfile::save_symmetric(&key, key_path)?;
        info!("fresh des key saved to `{}`", key_path.display());
        key
    };
    let des = DES::new(key);

    let buf = pad_to_block(data, DES::BLOCK_SIZE);
    let t = Instant::now();
    let mut out = Vec::with_capacity(buf.len());
    if decrypt {
        des.decrypt(&buf, &mut out)?;
    } else {
        des.encrypt(&buf, &mut out)?;
    }
    Ok((out, t.elapsed()))
}

/// `--seed` when given, OS entropy otherwise. A fixed seed reproduces the
/// whole key bit-for-bit.
fn prime_seed(m: &ArgMatches) -> u64 {
    m.get_one::<u64>("seed").copied().unwrap_or_else(|| {
        let mut buf = [0u8; 8];
        DefaultRand.rand(&mut buf);
        u64::from_le_bytes(buf)
    })
}

fn default_output(input: &Path, algo: Algorithm, decrypt: bool) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(algo.output_ext(decrypt));
    PathBuf::from(name)
}

fn padded_size(len: usize, block: usize) -> usize {
    if len % block != 0 {
        (len / block + 1) * block
    } else {
        len
    }
}

fn pad_to_block(data: &[u8], block: usize) -> Block {
    let mut buf = Block::from(data);
    buf.pad_to(padded_size(data.len(), block));
    buf
}

/// Decrypted output ends after the last non-zero byte. Padding and genuine
/// trailing zero bytes are indistinguishable here, so a plaintext that really
/// ends in zeros comes back shortened; an all-zero buffer keeps one byte.
fn trim_trailing_zeros(buf: &mut Vec<u8>) {
    let pos = buf.iter().rposition(|&b| b != 0).unwrap_or(0);
    buf.truncate(pos + 1);
}
