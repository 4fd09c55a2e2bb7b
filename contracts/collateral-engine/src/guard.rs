use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage::DataKey;

/// Runs `body` while holding the engine-wide lock. A call arriving while the
/// lock is held (re-entry through a token callback) is rejected outright.
pub fn non_reentrant<T, F>(env: &Env, body: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    if is_locked(env) {
        return Err(Error::Reentrancy);
    }
    env.storage().instance().set(&DataKey::Locked, &true);
    let out = body();
    env.storage().instance().remove(&DataKey::Locked);
    out
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Locked)
        .unwrap_or(false)
}
