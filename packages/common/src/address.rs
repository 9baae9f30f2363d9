//! EVM address helpers.
//!
//! Validator identities and cross-chain recipients are 20-byte EVM addresses.
//! On the wire (JSON messages, attributes) they are `0x`-prefixed hex strings.

use cosmwasm_std::{StdError, StdResult};

/// Length of an EVM address in bytes
pub const EVM_ADDRESS_LENGTH: usize = 20;

/// The all-zero address, never a valid signer or recipient
pub const ZERO_EVM_ADDRESS: [u8; EVM_ADDRESS_LENGTH] = [0u8; EVM_ADDRESS_LENGTH];

/// Parse an EVM address from a hex string (with or without 0x prefix).
///
/// Mixed case is accepted; checksum casing is not enforced.
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; EVM_ADDRESS_LENGTH]> {
    let hex_str = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_str.len() != EVM_ADDRESS_LENGTH * 2 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; EVM_ADDRESS_LENGTH];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to a lowercase EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; EVM_ADDRESS_LENGTH]) -> String {
    format!("0x{}", hex::encode(bytes))
}
