//! Relay message codec
//!
//! A relay message is the exact byte string validators sign:
//!
//! ```text
//! | recipient (20) | amount (32, uint256 BE) | source tx id (32) | bridge instance id (20) |
//! ```
//!
//! Every field has a fixed width, so two different field tuples can never
//! encode to the same bytes.

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::hash::keccak256;

/// Encoded message length in bytes
pub const MESSAGE_LENGTH: usize = 104;

const RECIPIENT: std::ops::Range<usize> = 0..20;
const AMOUNT: std::ops::Range<usize> = 20..52;
const SOURCE_TX_ID: std::ops::Range<usize> = 52..84;
const BRIDGE_INSTANCE_ID: std::ops::Range<usize> = 84..104;

/// Prefix of the EIP-191 personal-sign digest for a 104-byte message
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n104";

/// Decoded relay message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeMessage {
    pub recipient: [u8; 20],
    pub amount: Uint128,
    pub source_tx_id: [u8; 32],
    pub bridge_instance_id: [u8; 20],
}

impl BridgeMessage {
    /// Canonical encoding: the pre-image validators sign
    pub fn encode(&self) -> [u8; MESSAGE_LENGTH] {
        let mut out = [0u8; MESSAGE_LENGTH];
        out[RECIPIENT].copy_from_slice(&self.recipient);
        // u128 occupies the low 16 bytes of the uint256 slot
        out[AMOUNT.start + 16..AMOUNT.end].copy_from_slice(&self.amount.u128().to_be_bytes());
        out[SOURCE_TX_ID].copy_from_slice(&self.source_tx_id);
        out[BRIDGE_INSTANCE_ID].copy_from_slice(&self.bridge_instance_id);
        out
    }

    /// Parse and validate an encoded message
    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() != MESSAGE_LENGTH {
            return Err(malformed(format!(
                "expected {} bytes, got {}",
                MESSAGE_LENGTH,
                bytes.len()
            )));
        }

        let mut recipient = [0u8; 20];
        recipient.copy_from_slice(&bytes[RECIPIENT]);
        if recipient == [0u8; 20] {
            return Err(malformed("zero recipient"));
        }

        let amount_slot = &bytes[AMOUNT];
        if amount_slot[..16].iter().any(|b| *b != 0) {
            return Err(malformed("amount exceeds 128 bits"));
        }
        let mut low = [0u8; 16];
        low.copy_from_slice(&amount_slot[16..]);
        let amount = Uint128::new(u128::from_be_bytes(low));
        if amount.is_zero() {
            return Err(malformed("zero amount"));
        }

        let mut source_tx_id = [0u8; 32];
        source_tx_id.copy_from_slice(&bytes[SOURCE_TX_ID]);

        let mut bridge_instance_id = [0u8; 20];
        bridge_instance_id.copy_from_slice(&bytes[BRIDGE_INSTANCE_ID]);
        if bridge_instance_id == [0u8; 20] {
            return Err(malformed("zero bridge instance id"));
        }

        Ok(Self {
            recipient,
            amount,
            source_tx_id,
            bridge_instance_id,
        })
    }
}

/// EIP-191 digest of an encoded message:
/// `keccak256("\x19Ethereum Signed Message:\n104" || message)`
pub fn signing_hash(message: &[u8; MESSAGE_LENGTH]) -> [u8; 32] {
    let mut data = [0u8; SIGNED_MESSAGE_PREFIX.len() + MESSAGE_LENGTH];
    data[..SIGNED_MESSAGE_PREFIX.len()].copy_from_slice(SIGNED_MESSAGE_PREFIX);
    data[SIGNED_MESSAGE_PREFIX.len()..].copy_from_slice(message);
    keccak256(&data)
}

fn malformed(reason: impl Into<String>) -> ContractError {
    ContractError::MalformedMessage {
        reason: reason.into(),
    }
}
