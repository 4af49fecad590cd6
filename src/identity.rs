//! # Identity Provider
//!
//! Synthetic actors are fresh random keypairs with no ledger footprint until
//! they are funded. The root identity is the one exception: it is loaded
//! from an embedded secret so its address is identical on every run.

use solana_sdk::signature::Keypair;

use crate::{
    config::HarnessConfig,
    constants::LOCAL_ADMIN_SECRET,
    error::{HarnessError, HarnessResult},
};

/// Generate a fresh random actor
pub fn new_actor() -> Keypair {
    Keypair::new()
}

/// Generate `count` independent actors
pub fn new_actors(count: usize) -> Vec<Keypair> {
    (0..count).map(|_| new_actor()).collect()
}

/// Load a keypair from its 64-byte secret (secret key followed by public key)
pub fn keypair_from_secret(secret: &[u8]) -> HarnessResult<Keypair> {
    Keypair::from_bytes(secret).map_err(|e| HarnessError::InvalidKeypair(e.to_string()))
}

/// The fixed root identity (`bossj3JvwiNK7pvjr149DqdtJxf2gdygbcmEPTkb2F1`)
pub fn local_admin_keypair() -> Keypair {
    Keypair::from_bytes(&LOCAL_ADMIN_SECRET).expect("embedded root secret is a valid keypair")
}

/// Root identity for a run, as configured
pub fn root_keypair(config: &HarnessConfig) -> HarnessResult<Keypair> {
    keypair_from_secret(&config.root_secret)
}
