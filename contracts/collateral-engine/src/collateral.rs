use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::{CollateralDeposited, CollateralRedeemed};
use crate::helpers::{call_or, to_i128};
use crate::oracle;
use crate::storage;

/// Credits `amount` of `asset` to `user`, then pulls the tokens in.
pub fn deposit(env: &Env, user: &Address, asset: &Address, amount: u128) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::NeedsMoreThanZero);
    }
    storage::price_feed(env, asset)?;
    let amount_i128 = to_i128(amount)?;

    let balance = storage::collateral_balance(env, user, asset);
    let updated = balance.checked_add(amount).ok_or(Error::MathOverflow)?;
    storage::set_collateral_balance(env, user, asset, updated);
    CollateralDeposited {
        user: user.clone(),
        asset: asset.clone(),
        amount,
    }
    .publish(env);

    call_or(
        env,
        asset,
        "transfer",
        (user.clone(), env.current_contract_address(), amount_i128),
        Error::TransferFailed,
    )
}

/// Debits `amount` from `from` and pays it out to `to`. Solvency of `from`
/// is the caller's concern.
pub fn redeem(
    env: &Env,
    asset: &Address,
    amount: u128,
    from: &Address,
    to: &Address,
) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::NeedsMoreThanZero);
    }
    storage::price_feed(env, asset)?;
    let amount_i128 = to_i128(amount)?;

    let balance = storage::collateral_balance(env, from, asset);
    let remaining = balance
        .checked_sub(amount)
        .ok_or(Error::InsufficientCollateral)?;
    storage::set_collateral_balance(env, from, asset, remaining);
    CollateralRedeemed {
        from: from.clone(),
        to: to.clone(),
        asset: asset.clone(),
        amount,
    }
    .publish(env);

    call_or(
        env,
        asset,
        "transfer",
        (env.current_contract_address(), to.clone(), amount_i128),
        Error::TransferFailed,
    )
}

/// USD value (18 decimals) of everything `user` has deposited.
pub fn account_collateral_value(env: &Env, user: &Address) -> Result<u128, Error> {
    let mut total: u128 = 0;
    for asset in storage::collateral_assets(env).iter() {
        let balance = storage::collateral_balance(env, user, &asset);
        if balance == 0 {
            continue;
        }
        let value = oracle::usd_value(env, &asset, balance)?;
        total = total.checked_add(value).ok_or(Error::MathOverflow)?;
    }
    Ok(total)
}
