//! Read access to the validator set.
//!
//! The bridge never owns signer membership. It asks the validators contract
//! referenced in its config, through the interface in `common::validators`.

use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use common::encode_evm_address;
use common::validators::{IsValidatorResponse, RequiredSignaturesResponse, ValidatorsQueryMsg};

/// Membership and threshold lookups needed by quorum verification
pub trait ValidatorSet {
    /// Distinct validator signatures needed to authorize a message
    fn required_signatures(&self) -> StdResult<u32>;

    /// Whether the 20-byte identity is a current validator
    fn is_validator(&self, signer: &[u8; 20]) -> StdResult<bool>;
}

/// Validator set living in a separate validators contract
pub struct RemoteValidatorSet<'a> {
    querier: QuerierWrapper<'a>,
    contract: Addr,
}

impl<'a> RemoteValidatorSet<'a> {
    pub fn new(querier: QuerierWrapper<'a>, contract: Addr) -> Self {
        Self { querier, contract }
    }
}

impl ValidatorSet for RemoteValidatorSet<'_> {
    fn required_signatures(&self) -> StdResult<u32> {
        let res: RequiredSignaturesResponse = self
            .querier
            .query_wasm_smart(&self.contract, &ValidatorsQueryMsg::RequiredSignatures {})?;
        Ok(res.required_signatures)
    }

    fn is_validator(&self, signer: &[u8; 20]) -> StdResult<bool> {
        let res: IsValidatorResponse = self.querier.query_wasm_smart(
            &self.contract,
            &ValidatorsQueryMsg::IsValidator {
                validator: encode_evm_address(signer),
            },
        )?;
        Ok(res.is_validator)
    }
}
