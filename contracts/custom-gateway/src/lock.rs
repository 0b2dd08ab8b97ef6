//! Outbound reentrancy lock.
//!
//! On the origin domain an outbound transfer hands value held by this
//! contract to the protocol through a sub-message. The lock is taken before
//! the sub-message is dispatched and released in its reply. If the
//! sub-message fails, the transaction reverts and the acquisition is rolled
//! back with it, so the lock never outlives the call that took it.

use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Present (and `true`) while an outbound delegation is in flight
pub const OUTBOUND_LOCK: Item<bool> = Item::new("outbound_lock");

/// Take the outbound lock, failing if a transfer already holds it.
pub fn acquire_outbound_lock(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if is_outbound_locked(storage)? {
        return Err(ContractError::ReentrancyBlocked);
    }
    OUTBOUND_LOCK.save(storage, &true)?;
    Ok(())
}

/// Release the outbound lock. Releasing a free lock is a no-op.
pub fn release_outbound_lock(storage: &mut dyn Storage) {
    OUTBOUND_LOCK.remove(storage);
}

pub fn is_outbound_locked(storage: &dyn Storage) -> StdResult<bool> {
    Ok(OUTBOUND_LOCK.may_load(storage)?.unwrap_or(false))
}
