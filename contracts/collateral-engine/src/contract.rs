use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::collateral;
use crate::debt;
use crate::errors::Error;
use crate::guard::non_reentrant;
use crate::health;
use crate::liquidation;
use crate::oracle;
use crate::storage::{self, EngineParameters};

#[contract]
pub struct CollateralEngine;

#[contractimpl]
impl CollateralEngine {
    /// `collateral_assets[i]` is priced by `price_feeds[i]`. Each asset may be
    /// listed once; the set is fixed for the lifetime of the contract.
    pub fn __constructor(
        env: Env,
        collateral_assets: Vec<Address>,
        price_feeds: Vec<Address>,
        debt_token: Address,
    ) {
        if collateral_assets.len() != price_feeds.len() {
            panic_with_error!(&env, Error::AssetsAndFeedsLengthMismatch);
        }
        for (i, asset) in collateral_assets.iter().enumerate() {
            if collateral_assets.iter().skip(i + 1).any(|other| other == asset) {
                panic_with_error!(&env, Error::DuplicateAsset);
            }
        }
        storage::write_config(&env, &collateral_assets, &price_feeds, &debt_token);
    }

    pub fn deposit_collateral_and_mint(
        env: Env,
        user: Address,
        asset: Address,
        amount_collateral: u128,
        amount_to_mint: u128,
    ) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || {
            collateral::deposit(&env, &user, &asset, amount_collateral)?;
            debt::mint(&env, &user, amount_to_mint)?;
            health::assert_safe(&env, &user)
        })
    }

    pub fn deposit_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: u128,
    ) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || collateral::deposit(&env, &user, &asset, amount))
    }

    /// Burns `amount_to_burn` of the caller's debt, then withdraws collateral.
    pub fn redeem_collateral_for_debt(
        env: Env,
        user: Address,
        asset: Address,
        amount_collateral: u128,
        amount_to_burn: u128,
    ) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || {
            debt::burn(&env, amount_to_burn, &user, &user)?;
            collateral::redeem(&env, &asset, amount_collateral, &user, &user)?;
            health::assert_safe(&env, &user)
        })
    }

    pub fn redeem_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: u128,
    ) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || {
            collateral::redeem(&env, &asset, amount, &user, &user)?;
            health::assert_safe(&env, &user)
        })
    }

    pub fn mint(env: Env, user: Address, amount: u128) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || {
            debt::mint(&env, &user, amount)?;
            health::assert_safe(&env, &user)
        })
    }

    pub fn burn(env: Env, user: Address, amount: u128) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        user.require_auth();
        non_reentrant(&env, || {
            debt::burn(&env, amount, &user, &user)?;
            health::assert_safe(&env, &user)
        })
    }

    /// Covers `debt_to_cover` of `user`'s debt with the liquidator's tokens in
    /// exchange for `asset` collateral worth the same plus a 10% bonus.
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        asset: Address,
        user: Address,
        debt_to_cover: u128,
    ) -> Result<(), Error> {
        storage::bump_core_ttl(&env);
        liquidator.require_auth();
        non_reentrant(&env, || {
            liquidation::liquidate(&env, &liquidator, &asset, &user, debt_to_cover)
        })
    }

    pub fn health_factor(env: Env, user: Address) -> Result<u128, Error> {
        health::health_factor(&env, &user)
    }

    pub fn calculate_health_factor(
        env: Env,
        total_minted: u128,
        collateral_value_usd: u128,
    ) -> Result<u128, Error> {
        health::calculate_health_factor(&env, total_minted, collateral_value_usd)
    }

    /// Returns `(total_minted, collateral_value_usd)`.
    pub fn account_information(env: Env, user: Address) -> Result<(u128, u128), Error> {
        health::account_information(&env, &user)
    }

    pub fn account_collateral_value(env: Env, user: Address) -> Result<u128, Error> {
        collateral::account_collateral_value(&env, &user)
    }

    pub fn usd_value(env: Env, asset: Address, amount: u128) -> Result<u128, Error> {
        oracle::usd_value(&env, &asset, amount)
    }

    pub fn token_amount_from_usd(env: Env, asset: Address, usd_amount: u128) -> Result<u128, Error> {
        oracle::token_amount_from_usd(&env, &asset, usd_amount)
    }

    /// Collateral plus bonus a liquidator would receive for `debt_to_cover`.
    pub fn preview_seize(env: Env, asset: Address, debt_to_cover: u128) -> Result<u128, Error> {
        liquidation::seize_amount(&env, &asset, debt_to_cover)
    }

    pub fn collateral_balance(env: Env, user: Address, asset: Address) -> u128 {
        storage::collateral_balance(&env, &user, &asset)
    }

    pub fn minted(env: Env, user: Address) -> u128 {
        storage::minted(&env, &user)
    }

    pub fn collateral_assets(env: Env) -> Vec<Address> {
        storage::collateral_assets(&env)
    }

    pub fn price_feed(env: Env, asset: Address) -> Result<Address, Error> {
        storage::price_feed(&env, &asset)
    }

    pub fn debt_token(env: Env) -> Address {
        storage::debt_token(&env)
    }

    pub fn parameters(_env: Env) -> EngineParameters {
        storage::parameters()
    }
}
