use soroban_sdk::{contractevent, Address, Symbol};

/// Collateral credited to `user`; watched by off-chain liquidators.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralDeposited {
    #[topic]
    pub user: Address,
    #[topic]
    pub asset: Address,
    pub amount: u128,
}

/// Collateral debited from `from` and paid out to `to` (equal unless seized).
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRedeemed {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub asset: Address,
    pub amount: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtMinted {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub total_minted: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtBurned {
    #[topic]
    pub on_behalf_of: Address,
    #[topic]
    pub payer: Address,
    pub amount: u128,
    pub total_minted: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Liquidated {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub user: Address,
    pub asset: Address,
    pub debt_covered: u128,
    pub collateral_seized: u128,
}

/// A token call the engine depends on failed; the operation is rejected with
/// the matching reason code. Shows up in diagnostics of the failed call.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalCallFailed {
    #[topic]
    pub contract: Address,
    #[topic]
    pub function: Symbol,
    pub recoverable: bool,
    pub failure_kind: u32,
}
