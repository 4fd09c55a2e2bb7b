pub const PRECISION: u128 = 1_000_000_000_000_000_000u128; // 1e18
pub const PRICE_DECIMALS: u32 = 18;
pub const LIQUIDATION_THRESHOLD: u128 = 50; // 50% of collateral value counts
pub const LIQUIDATION_BONUS: u128 = 10; // 10% extra collateral to the liquidator
pub const LIQUIDATION_PRECISION: u128 = 100;
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;
pub const ORACLE_TIMEOUT_SECS: u64 = 3 * 60 * 60;
pub const MAX_DECIMALS: u32 = 38;
pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;
