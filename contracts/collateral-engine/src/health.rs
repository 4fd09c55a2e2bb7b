use soroban_sdk::{Address, Env};

use crate::collateral;
use crate::constants::*;
use crate::errors::Error;
use crate::helpers::mul_div;
use crate::storage;

/// `(value * 50%) * 1e18 / minted`; `u128::MAX` when nothing is owed or the
/// ratio does not fit.
pub fn calculate_health_factor(
    env: &Env,
    total_minted: u128,
    collateral_value_usd: u128,
) -> Result<u128, Error> {
    if total_minted == 0 {
        return Ok(u128::MAX);
    }
    let adjusted = mul_div(
        env,
        collateral_value_usd,
        LIQUIDATION_THRESHOLD,
        LIQUIDATION_PRECISION,
    )?;
    Ok(mul_div(env, adjusted, PRECISION, total_minted).unwrap_or(u128::MAX))
}

/// `(total_minted, collateral_value_usd)` for `user`.
pub fn account_information(env: &Env, user: &Address) -> Result<(u128, u128), Error> {
    let total_minted = storage::minted(env, user);
    let collateral_value = collateral::account_collateral_value(env, user)?;
    Ok((total_minted, collateral_value))
}

pub fn health_factor(env: &Env, user: &Address) -> Result<u128, Error> {
    let total_minted = storage::minted(env, user);
    if total_minted == 0 {
        return Ok(u128::MAX);
    }
    let collateral_value = collateral::account_collateral_value(env, user)?;
    calculate_health_factor(env, total_minted, collateral_value)
}

pub fn assert_safe(env: &Env, user: &Address) -> Result<(), Error> {
    if health_factor(env, user)? < MIN_HEALTH_FACTOR {
        return Err(Error::BreaksHealthFactor);
    }
    Ok(())
}
