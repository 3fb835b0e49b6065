use soroban_sdk::{Address, BytesN, Env};

use crate::errors::Error;
use crate::types::{MarketConfig, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD};

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> Result<MarketConfig, Error> {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &MarketConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    Ok(get_config(env)?.owner)
}

pub fn set_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    let mut config = get_config(env)?;
    config.owner = owner.clone();
    set_config(env, &config);
    Ok(())
}

pub fn get_auction_template(env: &Env) -> Result<BytesN<32>, Error> {
    Ok(get_config(env)?.auction_template)
}
