#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
enum DataKey {
    Initialized,
    Frozen,
    BurnPaused,
}

/// Token double. While frozen, every balance-moving call fails; with burns
/// paused only `burn` fails. Tests use both to break the engine's external
/// calls at a chosen step.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn initialize(env: Env, name: String, symbol: String, decimals: u32) {
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::Initialized)
            .is_some()
        {
            panic!("already initialized");
        }
        TokenBase::set_metadata(&env, decimals, name, symbol);
        env.storage().persistent().set(&DataKey::Initialized, &true);
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().persistent().set(&DataKey::Frozen, &frozen);
    }

    pub fn is_frozen(env: Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Frozen)
            .unwrap_or(false)
    }

    pub fn set_burn_paused(env: Env, paused: bool) {
        env.storage().persistent().set(&DataKey::BurnPaused, &paused);
    }

    pub fn name(env: Env) -> String {
        TokenBase::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        TokenBase::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &owner, &spender)
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::approve(&env, &owner, &spender, amount, u32::MAX);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        ensure_not_frozen(&env);
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, owner: Address, to: Address, amount: i128) {
        ensure_not_frozen(&env);
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer_from(&env, &spender, &owner, &to, amount);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        ensure_not_frozen(&env);
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::mint(&env, &to, amount);
    }

    pub fn burn(env: Env, from: Address, amount: i128) {
        ensure_not_frozen(&env);
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::BurnPaused)
            .unwrap_or(false)
        {
            panic!("burns paused");
        }
        from.require_auth();
        if amount <= 0 {
            panic!("bad amount");
        }
        let current = TokenBase::balance(&env, &from);
        if current < amount {
            panic!("insufficient balance");
        }
        TokenBase::update(&env, Some(&from), None, amount);
    }
}

fn ensure_not_frozen(env: &Env) {
    if env
        .storage()
        .persistent()
        .get::<_, bool>(&DataKey::Frozen)
        .unwrap_or(false)
    {
        panic!("token frozen");
    }
}

mod test;
