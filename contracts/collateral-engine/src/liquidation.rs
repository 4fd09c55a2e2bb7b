use soroban_sdk::{Address, Env};

use crate::collateral;
use crate::constants::*;
use crate::debt;
use crate::errors::Error;
use crate::events::Liquidated;
use crate::health;
use crate::oracle;

/// Collateral owed to a liquidator covering `debt_to_cover` USD of debt:
/// the equivalent amount of `asset` plus the liquidation bonus.
pub fn seize_amount(env: &Env, asset: &Address, debt_to_cover: u128) -> Result<u128, Error> {
    let token_amount = oracle::token_amount_from_usd(env, asset, debt_to_cover)?;
    let bonus = token_amount
        .checked_mul(LIQUIDATION_BONUS)
        .ok_or(Error::MathOverflow)?
        / LIQUIDATION_PRECISION;
    token_amount.checked_add(bonus).ok_or(Error::MathOverflow)
}

/// Repays part of an unsafe position's debt with the liquidator's tokens and
/// hands the liquidator the matching collateral plus bonus. Rejected unless
/// the position was unsafe beforehand and strictly healthier afterwards.
pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    asset: &Address,
    user: &Address,
    debt_to_cover: u128,
) -> Result<(), Error> {
    if debt_to_cover == 0 {
        return Err(Error::NeedsMoreThanZero);
    }
    let starting = health::health_factor(env, user)?;
    if starting >= MIN_HEALTH_FACTOR {
        return Err(Error::HealthFactorNotBroken);
    }

    let seized = seize_amount(env, asset, debt_to_cover)?;
    collateral::redeem(env, asset, seized, user, liquidator)?;
    debt::burn(env, debt_to_cover, user, liquidator)?;

    let ending = health::health_factor(env, user)?;
    if ending <= starting {
        return Err(Error::HealthFactorNotImproved);
    }
    health::assert_safe(env, liquidator)?;

    Liquidated {
        liquidator: liquidator.clone(),
        user: user.clone(),
        asset: asset.clone(),
        debt_covered: debt_to_cover,
        collateral_seized: seized,
    }
    .publish(env);
    Ok(())
}
