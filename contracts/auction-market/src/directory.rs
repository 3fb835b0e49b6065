//! Auction directory: child auction address -> asset it guards. An entry
//! exists exactly while the auction at that address is live.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::{StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

pub fn asset_of(env: &Env, child: &Address) -> Option<Address> {
    let key = StorageKey::Auction(child.clone());
    let asset = env.storage().persistent().get::<_, Address>(&key);
    if asset.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    asset
}

pub fn is_active(env: &Env, child: &Address) -> bool {
    let key = StorageKey::Auction(child.clone());
    let active = env.storage().persistent().has(&key);
    if active {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    active
}

pub fn require_active(env: &Env, child: &Address) -> Result<(), Error> {
    if !is_active(env, child) {
        return Err(Error::AuctionNotSet);
    }
    Ok(())
}

pub fn activate(env: &Env, child: &Address, asset: &Address) -> Result<(), Error> {
    if is_active(env, child) {
        return Err(Error::AuctionAlreadySet);
    }
    write(env, child, asset);
    Ok(())
}

/// Re-mark an auction that is already live.
pub fn renew(env: &Env, child: &Address, asset: &Address) -> Result<(), Error> {
    require_active(env, child)?;
    write(env, child, asset);
    Ok(())
}

pub fn deactivate(env: &Env, child: &Address) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Auction(child.clone()));
}

// ========== Deployed children ==========

/// A child contract outlives its auction, so a relisted pair reuses it.
pub fn is_deployed(env: &Env, child: &Address) -> bool {
    let key = StorageKey::Deployed(child.clone());
    let deployed = env.storage().persistent().has(&key);
    if deployed {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    deployed
}

pub fn mark_deployed(env: &Env, child: &Address) {
    let key = StorageKey::Deployed(child.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

fn write(env: &Env, child: &Address, asset: &Address) {
    let key = StorageKey::Auction(child.clone());
    env.storage().persistent().set(&key, asset);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
