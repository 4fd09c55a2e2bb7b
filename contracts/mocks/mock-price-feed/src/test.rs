#![cfg(test)]
use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};

#[test]
fn test_price_is_stamped_with_ledger_time() {
    let env = Env::default();
    env.ledger().with_mut(|l| l.timestamp = 1_000);
    let id = env.register(MockPriceFeed, (8u32,));
    let feed = MockPriceFeedClient::new(&env, &id);
    let asset = Address::generate(&env);

    assert_eq!(feed.decimals(), 8u32);
    assert_eq!(feed.lastprice(&Asset::Stellar(asset.clone())), None);

    feed.set_price(&asset, &2_000_0000_0000i128);
    let pd = feed.lastprice(&Asset::Stellar(asset.clone())).unwrap();
    assert_eq!(pd.price, 2_000_0000_0000i128);
    assert_eq!(pd.timestamp, 1_000u64);

    feed.set_price_at(&asset, &-1i128, &7u64);
    let pd = feed.lastprice(&Asset::Stellar(asset.clone())).unwrap();
    assert_eq!(pd, PriceData { price: -1, timestamp: 7 });

    feed.clear_price(&asset);
    assert_eq!(feed.lastprice(&Asset::Stellar(asset)), None);
}
