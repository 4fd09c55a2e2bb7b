#![cfg(test)]
use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, IntoVal};

fn setup(env: &Env) -> MockTokenClient<'_> {
    let id = env.register(MockToken, ());
    let token = MockTokenClient::new(env, &id);
    token.initialize(&"WBTC".into_val(env), &"WBTC".into_val(env), &18u32);
    token
}

#[test]
fn test_mint_and_transfer() {
    let env = Env::default();
    env.mock_all_auths();
    let token = setup(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    token.mint(&a, &100i128);
    token.transfer(&a, &b, &40i128);
    assert_eq!(token.balance(&a), 60i128);
    assert_eq!(token.balance(&b), 40i128);
    assert_eq!(token.total_supply(), 100i128);
}

#[test]
fn test_freeze_blocks_transfers_until_thawed() {
    let env = Env::default();
    env.mock_all_auths();
    let token = setup(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    token.mint(&a, &100i128);

    token.set_frozen(&true);
    assert!(token.is_frozen());
    assert!(token.try_transfer(&a, &b, &1i128).is_err());
    assert!(token.try_mint(&a, &1i128).is_err());
    assert_eq!(token.balance(&a), 100i128);

    token.set_frozen(&false);
    token.transfer(&a, &b, &1i128);
    assert_eq!(token.balance(&b), 1i128);
}

#[test]
fn test_burn_pause_only_blocks_burns() {
    let env = Env::default();
    env.mock_all_auths();
    let token = setup(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    token.mint(&a, &100i128);

    token.set_burn_paused(&true);
    assert!(token.try_burn(&a, &10i128).is_err());
    token.transfer(&a, &b, &10i128);
    token.mint(&a, &5i128);
    assert_eq!(token.balance(&a), 95i128);

    token.set_burn_paused(&false);
    token.burn(&a, &10i128);
    assert_eq!(token.balance(&a), 85i128);
    assert_eq!(token.total_supply(), 95i128);
}
