#![cfg(test)]
use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup(env: &Env) -> (DebtTokenClient<'_>, Address) {
    let admin = Address::generate(env);
    let id = env.register(DebtToken, ());
    let c = DebtTokenClient::new(env, &id);
    c.initialize(
        &String::from_str(env, "Synthetic USD"),
        &String::from_str(env, "sUSD"),
        &18u32,
        &admin,
    );
    (c, admin)
}

#[test]
fn test_token_mint_transfer_burn() {
    let env = Env::default();
    env.mock_all_auths();

    let (c, admin) = setup(&env);
    let a = Address::generate(&env);

    assert_eq!(c.decimals(), 18u32);
    assert_eq!(c.admin(), admin);

    c.mint(&a, &1000i128);
    assert_eq!(c.total_supply(), 1000i128);
    assert_eq!(c.balance(&a), 1000i128);

    // Holder hands tokens back to the admin, which destroys them
    c.transfer(&a, &admin, &300i128);
    assert_eq!(c.balance(&a), 700i128);
    assert_eq!(c.balance(&admin), 300i128);

    c.burn(&admin, &200i128);
    assert_eq!(c.balance(&admin), 100i128);
    assert_eq!(c.total_supply(), 800i128);
}

#[test]
fn test_approve_and_transfer_from() {
    let env = Env::default();
    env.mock_all_auths();

    let (c, _admin) = setup(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    c.mint(&a, &500i128);
    c.approve(&a, &b, &100i128);
    assert_eq!(c.allowance(&a, &b), 100i128);
    c.transfer_from(&b, &a, &b, &100i128);
    assert_eq!(c.balance(&a), 400i128);
    assert_eq!(c.balance(&b), 100i128);
    assert_eq!(c.allowance(&a, &b), 0i128);
}

#[test]
fn test_set_admin_moves_mint_rights() {
    let env = Env::default();
    env.mock_all_auths();

    let (c, _admin) = setup(&env);
    let engine = Address::generate(&env);
    c.set_admin(&engine);
    assert_eq!(c.admin(), engine);

    c.mint(&engine, &10i128);
    c.burn(&engine, &10i128);
    assert_eq!(c.total_supply(), 0i128);
}

#[test]
#[should_panic(expected = "bad amount")]
fn test_mint_zero_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, _admin) = setup(&env);
    let a = Address::generate(&env);
    c.mint(&a, &0i128);
}

#[test]
#[should_panic(expected = "insufficient balance")]
fn test_burn_more_than_balance_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, admin) = setup(&env);
    c.mint(&admin, &5i128);
    c.burn(&admin, &6i128);
}

#[test]
#[should_panic(expected = "burn from non-admin")]
fn test_burn_from_holder_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, _admin) = setup(&env);
    let a = Address::generate(&env);
    c.mint(&a, &5i128);
    c.burn(&a, &5i128);
}

#[test]
#[should_panic(expected = "already initialized")]
fn test_initialize_twice_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, admin) = setup(&env);
    c.initialize(
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "A"),
        &7u32,
        &admin,
    );
}
