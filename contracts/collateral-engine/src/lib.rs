#![no_std]

mod collateral;
mod constants;
mod contract;
mod debt;
mod errors;
mod events;
mod guard;
mod health;
mod helpers;
mod liquidation;
mod oracle;
mod storage;

pub use crate::constants::*;
pub use crate::contract::{CollateralEngine, CollateralEngineClient};
pub use crate::errors::Error;
pub use crate::events::*;
pub use crate::oracle::{Asset, PriceData};
pub use crate::storage::EngineParameters;
