use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::{DebtBurned, DebtMinted};
use crate::helpers::{call_or, to_i128};
use crate::storage;

pub fn mint(env: &Env, user: &Address, amount: u128) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::NeedsMoreThanZero);
    }
    let amount_i128 = to_i128(amount)?;
    let total_minted = storage::minted(env, user)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    storage::set_minted(env, user, total_minted);
    DebtMinted {
        user: user.clone(),
        amount,
        total_minted,
    }
    .publish(env);

    let debt_token = storage::debt_token(env);
    call_or(
        env,
        &debt_token,
        "mint",
        (user.clone(), amount_i128),
        Error::MintFailed,
    )
}

/// Clears `amount` of `on_behalf_of`'s debt with tokens supplied by `payer`.
/// The tokens are pulled into the engine and destroyed there.
pub fn burn(
    env: &Env,
    amount: u128,
    on_behalf_of: &Address,
    payer: &Address,
) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::NeedsMoreThanZero);
    }
    let amount_i128 = to_i128(amount)?;
    let total_minted = storage::minted(env, on_behalf_of)
        .checked_sub(amount)
        .ok_or(Error::InsufficientDebt)?;
    storage::set_minted(env, on_behalf_of, total_minted);
    DebtBurned {
        on_behalf_of: on_behalf_of.clone(),
        payer: payer.clone(),
        amount,
        total_minted,
    }
    .publish(env);

    let debt_token = storage::debt_token(env);
    let engine = env.current_contract_address();
    call_or(
        env,
        &debt_token,
        "transfer",
        (payer.clone(), engine.clone(), amount_i128),
        Error::TransferFailed,
    )?;
    call_or(
        env,
        &debt_token,
        "burn",
        (engine, amount_i128),
        Error::BurnFailed,
    )
}
