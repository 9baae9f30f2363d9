use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:foreign-bridge-validators";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Item<Addr> = Item::new("owner");

pub const REQUIRED_SIGNATURES: Item<u32> = Item::new("required_signatures");

/// 20-byte EVM address => active
pub const VALIDATORS: Map<&[u8], bool> = Map::new("validators");

pub const VALIDATOR_COUNT: Item<u32> = Item::new("validator_count");
