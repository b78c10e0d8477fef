//! Raw key-material persistence. An RSA key file is three consecutive
//! integers `e`, `d`, `n`, each stored as a big-endian `u32` byte count
//! followed by the big-endian magnitude bytes. Symmetric key files hold the
//! raw key bytes. The format only promises self-consistency between this
//! writer and this reader.

use crate::error::Error;
use anyhow::Context;
use cipher::rsa::PrivateKey;
use num_bigint::BigUint;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use utils::Block;

fn write_biguint<W: Write>(w: &mut W, x: &BigUint) -> std::io::Result<()> {
    let bytes = x.to_bytes_be();
    w.write_all(&(bytes.len() as u32).to_be_bytes())?;
    w.write_all(bytes.as_slice())
}

fn read_biguint<R: Read>(r: &mut R) -> std::io::Result<BigUint> {
    let mut len = [0u8; 4];
    r.read_exact(&mut len)?;
    let mut bytes = vec![0u8; u32::from_be_bytes(len) as usize];
    r.read_exact(bytes.as_mut_slice())?;
    Ok(BigUint::from_bytes_be(bytes.as_slice()))
}

pub fn save_rsa(key: &PrivateKey, path: &Path) -> anyhow::Result<()> {
    let mut f = File::create(path)
        .with_context(|| format!("create key file `{}`", path.display()))?;
    write_biguint(&mut f, key.public_key().exponent())?;
    write_biguint(&mut f, key.exponent())?;
    write_biguint(&mut f, key.public_key().modulus())?;
    Ok(())
}

pub fn load_rsa(path: &Path) -> anyhow::Result<PrivateKey> {
    let data = Block::from(
        std::fs::read(path).with_context(|| format!("read key file `{}`", path.display()))?,
    );

    let bad = || Error::BadKeyFile {
        path: path.to_path_buf(),
    };
    let mut r = data.as_slice();
    let e = read_biguint(&mut r).map_err(|_| bad())?;
    let d = read_biguint(&mut r).map_err(|_| bad())?;
    let n = read_biguint(&mut r).map_err(|_| bad())?;

    let key = PrivateKey::new_uncheck(n, e, d);
    key.is_valid()
        .with_context(|| format!("key file `{}`", path.display()))?;
    Ok(key)
}

pub fn save_symmetric(key: &[u8], path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, key)
        .with_context(|| format!("create key file `{}`", path.display()))
}

pub fn load_symmetric<const N: usize>(path: &Path) -> anyhow::Result<[u8; N]> {
    let data = Block::from(
        std::fs::read(path).with_context(|| format!("read key file `{}`", path.display()))?,
    );
    let key = data.as_slice().try_into().map_err(|_| Error::BadKeyFile {
        path: path.to_path_buf(),
    })?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::{load_rsa, load_symmetric, save_rsa, save_symmetric};
    use cipher::rsa::PrivateKey;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("fcrypt-keyfile-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn rsa_key_round_trip() {
        let path = scratch("rsa");
        let key = PrivateKey::generate(32, 233);

        save_rsa(&key, &path).unwrap();
        let loaded = load_rsa(&path).unwrap();
        assert_eq!(loaded, key);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rsa_key_rejects_garbage() {
        let path = scratch("garbage");
        std::fs::write(&path, [0xffu8; 5]).unwrap();
        assert!(load_rsa(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn symmetric_key_round_trip() {
        let path = scratch("aes");
        let key = [7u8; 16];

        save_symmetric(&key, &path).unwrap();
        assert_eq!(load_symmetric::<16>(&path).unwrap(), key);
        // wrong width is a malformed key file
        assert!(load_symmetric::<8>(&path).is_err());

        std::fs::remove_file(&path).ok();
    }
}
