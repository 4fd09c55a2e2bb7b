use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NeedsMoreThanZero = 1,
    AssetsAndFeedsLengthMismatch = 2,
    AssetNotAllowed = 3,
    TransferFailed = 4,
    MintFailed = 5,
    BurnFailed = 6,
    BreaksHealthFactor = 7,
    HealthFactorNotBroken = 8,
    HealthFactorNotImproved = 9,
    StalePrice = 10,
    InvalidPrice = 11,
    PriceUnavailable = 12,
    InsufficientCollateral = 13,
    InsufficientDebt = 14,
    MathOverflow = 15,
    Reentrancy = 16,
    DuplicateAsset = 17,
}
