//! Relay ledger: replay protection keyed by source transaction id.
//!
//! Entries are write-once. Nothing in the contract ever clears a relayed flag.

use cosmwasm_std::{StdResult, Storage};

use crate::state::{RelayRecord, RELAYED_MESSAGES, RELAY_RECORDS};

/// Whether `source_tx_id` has already been relayed
pub fn is_relayed(storage: &dyn Storage, source_tx_id: &[u8; 32]) -> StdResult<bool> {
    Ok(RELAYED_MESSAGES
        .may_load(storage, source_tx_id)?
        .unwrap_or(false))
}

/// Mark `source_tx_id` as relayed.
///
/// Returns `false` without touching storage when the id is already marked.
pub fn try_mark_relayed(storage: &mut dyn Storage, source_tx_id: &[u8; 32]) -> StdResult<bool> {
    if is_relayed(storage, source_tx_id)? {
        return Ok(false);
    }
    RELAYED_MESSAGES.save(storage, source_tx_id, &true)?;
    Ok(true)
}

pub fn save_record(storage: &mut dyn Storage, record: &RelayRecord) -> StdResult<()> {
    RELAY_RECORDS.save(storage, &record.source_tx_id, record)
}

pub fn load_record(storage: &dyn Storage, source_tx_id: &[u8; 32]) -> StdResult<Option<RelayRecord>> {
    RELAY_RECORDS.may_load(storage, source_tx_id)
}
