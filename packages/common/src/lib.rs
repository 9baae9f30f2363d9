//! Common - Shared Types and Utilities for the Foreign Bridge Contracts
//!
//! This package provides the types shared between the bridge contract and the
//! validator set contract: asset descriptors, EVM address helpers and the
//! query interface the bridge uses to consult the validator set.

pub mod address;
pub mod asset;
pub mod validators;

pub use address::{encode_evm_address, parse_evm_address, EVM_ADDRESS_LENGTH, ZERO_EVM_ADDRESS};
pub use asset::AssetInfo;
