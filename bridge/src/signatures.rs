//! Signature recovery and quorum verification
//!
//! Validators sign the EIP-191 digest of an encoded relay message with their
//! secp256k1 key. A signer's identity is the Ethereum address of the
//! recovered public key.

use std::collections::BTreeSet;

use cosmwasm_std::Api;

use common::{encode_evm_address, ZERO_EVM_ADDRESS};

use crate::error::ContractError;
use crate::hash::keccak256;
use crate::message::{signing_hash, MESSAGE_LENGTH};
use crate::msg::SignatureMsg;
use crate::validator_set::ValidatorSet;

/// A `(v, r, s)` secp256k1 signature with `v` in {27, 28}
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl TryFrom<&SignatureMsg> for Signature {
    type Error = ContractError;

    fn try_from(msg: &SignatureMsg) -> Result<Self, Self::Error> {
        let r: [u8; 32] = msg
            .r
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidSignature)?;
        let s: [u8; 32] = msg
            .s
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidSignature)?;
        Ok(Self { v: msg.v, r, s })
    }
}

/// Recover the signer address of `signature` over the digest `hash`.
pub fn recover_signer(
    api: &dyn Api,
    hash: &[u8; 32],
    signature: &Signature,
) -> Result<[u8; 20], ContractError> {
    let recovery_param = match signature.v {
        27 | 28 => signature.v - 27,
        _ => return Err(ContractError::InvalidSignature),
    };
    if signature.r == [0u8; 32] || signature.s == [0u8; 32] {
        return Err(ContractError::InvalidSignature);
    }

    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(&signature.r);
    rs[32..].copy_from_slice(&signature.s);

    let pubkey = api
        .secp256k1_recover_pubkey(hash, &rs, recovery_param)
        .map_err(|_| ContractError::InvalidSignature)?;
    // Uncompressed SEC1: 0x04 || X || Y
    if pubkey.len() != 65 {
        return Err(ContractError::InvalidSignature);
    }

    let digest = keccak256(&pubkey[1..]);
    let mut signer = [0u8; 20];
    signer.copy_from_slice(&digest[12..]);
    if signer == ZERO_EVM_ADDRESS {
        return Err(ContractError::InvalidSignature);
    }
    Ok(signer)
}

/// Check that `signatures` carry a quorum of distinct validators for
/// `message`, returning the signers in presentation order.
///
/// Entries are processed in order; for each one the signer is recovered,
/// then checked for membership, then checked against the signers already
/// seen. The first failing entry decides the error.
pub fn verify_quorum<V: ValidatorSet + ?Sized>(
    api: &dyn Api,
    validators: &V,
    message: &[u8; MESSAGE_LENGTH],
    signatures: &[Signature],
) -> Result<Vec<[u8; 20]>, ContractError> {
    let required = validators.required_signatures()?;
    if (signatures.len() as u64) < u64::from(required) {
        return Err(ContractError::InsufficientQuorum {
            got: signatures.len() as u32,
            required,
        });
    }

    let hash = signing_hash(message);
    let mut seen = BTreeSet::new();
    let mut signers = Vec::with_capacity(signatures.len());

    for signature in signatures {
        let signer = recover_signer(api, &hash, signature)?;
        if !validators.is_validator(&signer)? {
            return Err(ContractError::NotAValidator {
                signer: encode_evm_address(&signer),
            });
        }
        if !seen.insert(signer) {
            return Err(ContractError::DuplicateSignature {
                signer: encode_evm_address(&signer),
            });
        }
        signers.push(signer);
    }

    Ok(signers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::{StdResult, Uint128};
    use k256::ecdsa::SigningKey;

    use crate::message::BridgeMessage;

    struct StaticValidatorSet {
        members: Vec<[u8; 20]>,
        required: u32,
    }

    impl ValidatorSet for StaticValidatorSet {
        fn required_signatures(&self) -> StdResult<u32> {
            Ok(self.required)
        }

        fn is_validator(&self, signer: &[u8; 20]) -> StdResult<bool> {
            Ok(self.members.contains(signer))
        }
    }

    fn key(seed: u8) -> SigningKey {
        let mut bytes = [0u8; 32];
        bytes[31] = seed;
        SigningKey::from_slice(&bytes).unwrap()
    }

    fn address(key: &SigningKey) -> [u8; 20] {
        let point = key.verifying_key().to_encoded_point(false);
        let digest = keccak256(&point.as_bytes()[1..]);
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest[12..]);
        out
    }

    fn sign(key: &SigningKey, message: &[u8; MESSAGE_LENGTH]) -> Signature {
        let (sig, recid) = key
            .sign_prehash_recoverable(&signing_hash(message))
            .unwrap();
        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Signature {
            v: 27 + recid.to_byte(),
            r,
            s,
        }
    }

    fn message() -> [u8; MESSAGE_LENGTH] {
        BridgeMessage {
            recipient: [0x42; 20],
            amount: Uint128::new(1_000),
            source_tx_id: [0x07; 32],
            bridge_instance_id: [0x99; 20],
        }
        .encode()
    }

    fn set(keys: &[&SigningKey], required: u32) -> StaticValidatorSet {
        StaticValidatorSet {
            members: keys.iter().map(|k| address(k)).collect(),
            required,
        }
    }

    #[test]
    fn test_recover_known_key() {
        // Private key 1 controls 0x7e5f4552091a69125d5dfcb7b8c2659029395bdf
        let api = MockApi::default();
        let k = key(1);
        let msg = message();
        let signer = recover_signer(&api, &signing_hash(&msg), &sign(&k, &msg)).unwrap();
        assert_eq!(
            encode_evm_address(&signer),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_recover_rejects_bad_v() {
        let api = MockApi::default();
        let msg = message();
        let mut sig = sign(&key(1), &msg);
        sig.v = 29;
        assert_eq!(
            recover_signer(&api, &signing_hash(&msg), &sig).unwrap_err(),
            ContractError::InvalidSignature
        );
        sig.v = 0;
        assert!(recover_signer(&api, &signing_hash(&msg), &sig).is_err());
    }

    #[test]
    fn test_signature_msg_width_checked() {
        let msg = SignatureMsg {
            v: 27,
            r: vec![1u8; 31].into(),
            s: vec![1u8; 32].into(),
        };
        assert_eq!(
            Signature::try_from(&msg).unwrap_err(),
            ContractError::InvalidSignature
        );
    }

    #[test]
    fn test_quorum_met_in_any_order() {
        let api = MockApi::default();
        let (a, b, c) = (key(1), key(2), key(3));
        let validators = set(&[&a, &b, &c], 2);
        let msg = message();

        let signers =
            verify_quorum(&api, &validators, &msg, &[sign(&c, &msg), sign(&a, &msg)]).unwrap();
        assert_eq!(signers, vec![address(&c), address(&a)]);

        let signers = verify_quorum(
            &api,
            &validators,
            &msg,
            &[sign(&a, &msg), sign(&b, &msg), sign(&c, &msg)],
        )
        .unwrap();
        assert_eq!(signers.len(), 3);
    }

    #[test]
    fn test_too_few_signatures() {
        let api = MockApi::default();
        let (a, b) = (key(1), key(2));
        let validators = set(&[&a, &b], 2);
        let msg = message();

        let err = verify_quorum(&api, &validators, &msg, &[sign(&a, &msg)]).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientQuorum {
                got: 1,
                required: 2
            }
        );
    }

    #[test]
    fn test_duplicate_signer_never_counts_twice() {
        let api = MockApi::default();
        let (a, b) = (key(1), key(2));
        let validators = set(&[&a, &b], 2);
        let msg = message();
        let sig = sign(&a, &msg);

        let err = verify_quorum(&api, &validators, &msg, &[sig.clone(), sig]).unwrap_err();
        assert_eq!(
            err,
            ContractError::DuplicateSignature {
                signer: encode_evm_address(&address(&a))
            }
        );
    }

    #[test]
    fn test_outsider_rejected() {
        let api = MockApi::default();
        let (a, outsider) = (key(1), key(9));
        let validators = set(&[&a], 1);
        let msg = message();

        let err = verify_quorum(&api, &validators, &msg, &[sign(&outsider, &msg)]).unwrap_err();
        assert!(matches!(err, ContractError::NotAValidator { .. }));
    }

    #[test]
    fn test_first_failing_entry_decides_error() {
        let api = MockApi::default();
        let (a, outsider) = (key(1), key(9));
        let validators = set(&[&a], 1);
        let msg = message();
        let sig_a = sign(&a, &msg);

        // Duplicate comes before the outsider
        let err = verify_quorum(
            &api,
            &validators,
            &msg,
            &[sig_a.clone(), sig_a.clone(), sign(&outsider, &msg)],
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::DuplicateSignature { .. }));

        // Outsider comes before the duplicate
        let err = verify_quorum(
            &api,
            &validators,
            &msg,
            &[sig_a.clone(), sign(&outsider, &msg), sig_a],
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::NotAValidator { .. }));
    }

    #[test]
    fn test_signature_over_other_message_fails_membership() {
        let api = MockApi::default();
        let a = key(1);
        let validators = set(&[&a], 1);
        let msg = message();
        let mut other = msg;
        other[0] ^= 0xff;

        // Recovers some unrelated key, which is not a validator
        let err = verify_quorum(&api, &validators, &msg, &[sign(&a, &other)]).unwrap_err();
        assert!(matches!(
            err,
            ContractError::NotAValidator { .. } | ContractError::InvalidSignature
        ));
    }
}
