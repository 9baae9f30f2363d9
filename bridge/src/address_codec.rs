//! Local Address Encoding
//!
//! Relay messages carry the recipient as a raw 20-byte account, the way the
//! other side of the bridge sees it. Locally that account is the bech32
//! rendering of the same bytes under the chain's prefix.

use bech32::{ToBase32, Variant};
use cosmwasm_std::{Api, Addr, StdError, StdResult};

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
}

/// Turn a signed 20-byte recipient into a validated local address
pub fn recipient_to_addr(api: &dyn Api, bytes: &[u8; 20], hrp: &str) -> StdResult<Addr> {
    let encoded = encode_bech32_address(bytes, hrp)?;
    api.addr_validate(&encoded)
}
