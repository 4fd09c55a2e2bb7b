use soroban_sdk::{Address, Env, IntoVal, Symbol, U256};

use crate::constants::MAX_DECIMALS;
use crate::errors::Error;
use crate::events::ExternalCallFailed;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CallErrorKind {
    ContractRevert,
    HostError,
}

impl CallErrorKind {
    pub fn as_code(&self) -> u32 {
        match self {
            CallErrorKind::ContractRevert => 0,
            CallErrorKind::HostError => 1,
        }
    }
}

pub(crate) struct CallError {
    pub function: Symbol,
    pub kind: CallErrorKind,
}

pub(crate) fn emit_external_call_failure(
    env: &Env,
    contract: &Address,
    error: &CallError,
    recoverable: bool,
) {
    ExternalCallFailed {
        contract: contract.clone(),
        function: error.function.clone(),
        recoverable,
        failure_kind: error.kind.as_code(),
    }
    .publish(env);
}

/// Invokes `func` on `contract` without letting a failure abort the caller,
/// so each ledger can report its own reason code.
pub(crate) fn try_call_contract<T, A>(
    env: &Env,
    contract: &Address,
    func: &str,
    args: A,
) -> Result<T, CallError>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
    A: IntoVal<Env, soroban_sdk::Vec<soroban_sdk::Val>>,
{
    use soroban_sdk::{InvokeError, Val, Vec};
    let symbol = Symbol::new(env, func);
    let args_val: Vec<Val> = args.into_val(env);
    match env.try_invoke_contract::<T, InvokeError>(contract, &symbol, args_val) {
        Ok(Ok(val)) => Ok(val),
        Ok(Err(_)) => Err(CallError {
            function: symbol,
            kind: CallErrorKind::ContractRevert,
        }),
        Err(Ok(_)) | Err(Err(_)) => Err(CallError {
            function: symbol,
            kind: CallErrorKind::HostError,
        }),
    }
}

/// Runs an external call whose failure rejects the operation with `reason`.
pub(crate) fn call_or<A>(
    env: &Env,
    contract: &Address,
    func: &str,
    args: A,
    reason: Error,
) -> Result<(), Error>
where
    A: IntoVal<Env, soroban_sdk::Vec<soroban_sdk::Val>>,
{
    try_call_contract::<(), A>(env, contract, func, args).map_err(|err| {
        emit_external_call_failure(env, contract, &err, false);
        reason
    })
}

pub fn to_i128(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::MathOverflow)
}

/// `a * b / c` with a 256-bit intermediate product, floored.
pub fn mul_div(env: &Env, a: u128, b: u128, c: u128) -> Result<u128, Error> {
    if c == 0 {
        return Err(Error::MathOverflow);
    }
    U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, c))
        .to_u128()
        .ok_or(Error::MathOverflow)
}

pub fn pow10_u128(decimals: u32) -> Result<u128, Error> {
    if decimals > MAX_DECIMALS {
        return Err(Error::MathOverflow);
    }
    let mut result: u128 = 1;
    let mut i = 0u32;
    while i < decimals {
        result = result.checked_mul(10).ok_or(Error::MathOverflow)?;
        i += 1;
    }
    Ok(result)
}
