//! Hash computation for cross-chain identifiers
//!
//! All identifiers the bridge exchanges with validators are keccak256 based so
//! they can be recomputed byte-for-byte by EVM tooling on the other side.
//!
//! # Deposit id layout (136 bytes)
//! - Bytes 0-19:    bridgeInstanceId (20 bytes)
//! - Bytes 20-51:   keccak256(sender) (32 bytes)
//! - Bytes 52-71:   recipient (20 bytes)
//! - Bytes 72-103:  amount (uint256, big-endian, left-padded)
//! - Bytes 104-135: nonce (uint256, big-endian, left-padded)

use cosmwasm_std::Addr;
use tiny_keccak::{Hasher, Keccak};

use crate::state::BRIDGE_MODE_TAG;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Identity of this bridge deployment: the low 20 bytes of
/// `keccak256(contract_address)`.
///
/// Signed messages embed it so a signature for one deployment is useless on
/// another.
pub fn bridge_instance_id(contract: &Addr) -> [u8; 20] {
    let digest = keccak256(contract.as_bytes());
    let mut id = [0u8; 20];
    id.copy_from_slice(&digest[12..]);
    id
}

/// 4-byte bridge mode tag: `keccak256("inverted-native-to-erc-core")[..4]`
pub fn bridge_mode() -> [u8; 4] {
    let digest = keccak256(BRIDGE_MODE_TAG.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Compute the id under which a deposit is published for validators
pub fn compute_deposit_id(
    bridge_instance_id: &[u8; 20],
    sender: &Addr,
    recipient: &[u8; 20],
    amount: u128,
    nonce: u64,
) -> [u8; 32] {
    let mut data = [0u8; 136];

    data[0..20].copy_from_slice(bridge_instance_id);
    data[20..52].copy_from_slice(&keccak256(sender.as_bytes()));
    data[52..72].copy_from_slice(recipient);

    // u128 amount goes into the low 16 bytes of its uint256 slot
    data[72 + 16..104].copy_from_slice(&amount.to_be_bytes());

    // u64 nonce goes into the low 8 bytes of its uint256 slot
    data[104 + 24..136].copy_from_slice(&nonce.to_be_bytes());

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
