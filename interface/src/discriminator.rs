//! Anchor-style 8-byte discriminators, the first 8 bytes of the sha256 digest of
//! `"<namespace>:<name>"`.

use sha2::{
    Digest,
    Sha256,
};

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

pub fn sighash(namespace: &str, name: &str) -> Discriminator {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    discriminator
}

/// Prefix of an instruction's data. `name` is the snake_case handler name.
pub fn instruction_discriminator(name: &str) -> Discriminator {
    sighash("global", name)
}

/// Prefix of an account's data. `name` is the account struct's name.
pub fn account_discriminator(name: &str) -> Discriminator {
    sighash("account", name)
}
