#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};

#[contracttype]
enum DataKey {
    Decimals,
    Price(Address),
}

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// Reflector-shaped feed whose readings are written directly by tests.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::Decimals, &decimals);
    }

    /// Records `price` stamped with the current ledger time.
    pub fn set_price(env: Env, asset: Address, price: i128) {
        let timestamp = env.ledger().timestamp();
        Self::set_price_at(env, asset, price, timestamp);
    }

    pub fn set_price_at(env: Env, asset: Address, price: i128, timestamp: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::Price(asset), &PriceData { price, timestamp });
    }

    pub fn clear_price(env: Env, asset: Address) {
        env.storage().persistent().remove(&DataKey::Price(asset));
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Decimals)
            .unwrap_or(8u32)
    }

    pub fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        match asset {
            Asset::Stellar(addr) => env.storage().persistent().get(&DataKey::Price(addr)),
            Asset::Other(_) => None,
        }
    }
}

mod test;
