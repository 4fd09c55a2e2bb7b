use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::constants::*;
use crate::errors::Error;

#[contracttype]
pub enum DataKey {
    CollateralAssets,             // Vec<Address>, ordered as configured
    PriceFeed(Address),           // asset -> feed contract
    DebtToken,                    // Address
    Collateral(Address, Address), // (user, asset) -> u128
    Minted(Address),              // user -> u128
    Locked,                       // instance flag, held while a mutating call runs
}

/// Protocol constants as exposed to integrators.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineParameters {
    pub precision: u128,
    pub liquidation_threshold: u128,
    pub liquidation_bonus: u128,
    pub liquidation_precision: u128,
    pub min_health_factor: u128,
    pub oracle_timeout_secs: u64,
}

pub fn parameters() -> EngineParameters {
    EngineParameters {
        precision: PRECISION,
        liquidation_threshold: LIQUIDATION_THRESHOLD,
        liquidation_bonus: LIQUIDATION_BONUS,
        liquidation_precision: LIQUIDATION_PRECISION,
        min_health_factor: MIN_HEALTH_FACTOR,
        oracle_timeout_secs: ORACLE_TIMEOUT_SECS,
    }
}

pub fn write_config(env: &Env, assets: &Vec<Address>, feeds: &Vec<Address>, debt_token: &Address) {
    let persistent = env.storage().persistent();
    persistent.set(&DataKey::CollateralAssets, assets);
    for (asset, feed) in assets.iter().zip(feeds.iter()) {
        persistent.set(&DataKey::PriceFeed(asset), &feed);
    }
    persistent.set(&DataKey::DebtToken, debt_token);
    bump_core_ttl(env);
    for asset in assets.iter() {
        bump_price_feed_ttl(env, &asset);
    }
}

pub fn collateral_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CollateralAssets)
        .unwrap_or(Vec::new(env))
}

/// Feed for an allowed asset; anything not configured at construction is rejected.
pub fn price_feed(env: &Env, asset: &Address) -> Result<Address, Error> {
    bump_price_feed_ttl(env, asset);
    env.storage()
        .persistent()
        .get(&DataKey::PriceFeed(asset.clone()))
        .ok_or(Error::AssetNotAllowed)
}

pub fn debt_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::DebtToken)
        .expect("debt token not set")
}

pub fn collateral_balance(env: &Env, user: &Address, asset: &Address) -> u128 {
    let key = DataKey::Collateral(user.clone(), asset.clone());
    bump_entry_ttl(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0u128)
}

pub fn set_collateral_balance(env: &Env, user: &Address, asset: &Address, amount: u128) {
    let key = DataKey::Collateral(user.clone(), asset.clone());
    env.storage().persistent().set(&key, &amount);
    bump_entry_ttl(env, &key);
}

pub fn minted(env: &Env, user: &Address) -> u128 {
    let key = DataKey::Minted(user.clone());
    bump_entry_ttl(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0u128)
}

pub fn set_minted(env: &Env, user: &Address, amount: u128) {
    let key = DataKey::Minted(user.clone());
    env.storage().persistent().set(&key, &amount);
    bump_entry_ttl(env, &key);
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::CollateralAssets) {
        persistent.extend_ttl(&DataKey::CollateralAssets, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::DebtToken) {
        persistent.extend_ttl(&DataKey::DebtToken, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn bump_price_feed_ttl(env: &Env, asset: &Address) {
    bump_entry_ttl(env, &DataKey::PriceFeed(asset.clone()));
}

fn bump_entry_ttl(env: &Env, key: &DataKey) {
    let persistent = env.storage().persistent();
    if persistent.has(key) {
        persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
