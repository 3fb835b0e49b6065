//! Escrow registry: fingerprints of (seller, asset) pairs whose asset is held
//! by the market and not yet settled.

use soroban_sdk::{Env, U256};

use crate::errors::Error;
use crate::types::{StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

pub fn confirm(env: &Env, fingerprint: &U256) {
    let key = StorageKey::Escrow(fingerprint.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn is_confirmed(env: &Env, fingerprint: &U256) -> bool {
    let key = StorageKey::Escrow(fingerprint.clone());
    let confirmed = env.storage().persistent().has(&key);
    if confirmed {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    confirmed
}

pub fn require_confirmed(env: &Env, fingerprint: &U256) -> Result<(), Error> {
    if !is_confirmed(env, fingerprint) {
        return Err(Error::EscrowNotConfirmed);
    }
    Ok(())
}

pub fn clear(env: &Env, fingerprint: &U256) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Escrow(fingerprint.clone()));
}
