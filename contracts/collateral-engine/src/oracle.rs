use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::constants::*;
use crate::errors::Error;
use crate::helpers::{mul_div, pow10_u128};
use crate::storage;

// Reflector-compatible subset; each collateral asset is priced by its own feed.
#[soroban_sdk::contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(e: Env) -> u32;
    fn lastprice(e: Env, asset: Asset) -> Option<PriceData>;
}

#[contracttype(export = false)]
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}

#[contracttype(export = false)]
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// Latest reading for `asset`, rejected once older than the oracle timeout.
/// Only the age is checked here; the sign of the answer is left to callers.
pub fn stale_checked_reading(env: &Env, feed: &Address, asset: &Address) -> Result<PriceData, Error> {
    let reading = PriceFeedClient::new(env, feed)
        .lastprice(&Asset::Stellar(asset.clone()))
        .ok_or(Error::PriceUnavailable)?;
    let age = env.ledger().timestamp().saturating_sub(reading.timestamp);
    if age > ORACLE_TIMEOUT_SECS {
        return Err(Error::StalePrice);
    }
    Ok(reading)
}

/// USD price of one whole unit of `asset`, scaled to 18 decimals.
pub fn usd_price(env: &Env, asset: &Address) -> Result<u128, Error> {
    let feed = storage::price_feed(env, asset)?;
    let reading = stale_checked_reading(env, &feed, asset)?;
    if reading.price <= 0 {
        return Err(Error::InvalidPrice);
    }
    let price = reading.price as u128;
    let decimals = PriceFeedClient::new(env, &feed).decimals();
    let normalized = if decimals <= PRICE_DECIMALS {
        price
            .checked_mul(pow10_u128(PRICE_DECIMALS - decimals)?)
            .ok_or(Error::MathOverflow)?
    } else {
        price / pow10_u128(decimals - PRICE_DECIMALS)?
    };
    // a feed with more than 18 decimals can still round down to nothing
    if normalized == 0 {
        return Err(Error::InvalidPrice);
    }
    Ok(normalized)
}

pub fn usd_value(env: &Env, asset: &Address, amount: u128) -> Result<u128, Error> {
    let price = usd_price(env, asset)?;
    mul_div(env, price, amount, PRECISION)
}

pub fn token_amount_from_usd(env: &Env, asset: &Address, usd_amount: u128) -> Result<u128, Error> {
    let price = usd_price(env, asset)?;
    mul_div(env, usd_amount, PRECISION, price)
}
