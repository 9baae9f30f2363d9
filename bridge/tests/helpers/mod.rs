//! Shared cw-multi-test setup for the bridge integration tests.
//!
//! Deploys a validators contract and a bridge, funds the bridge with the
//! native denom, and signs relay messages with real secp256k1 keys.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Empty, Uint128};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use bridge::address_codec::encode_bech32_address;
use bridge::msg::{
    BridgeInstanceIdResponse, ExecuteMsg, InitializeMsg, InstantiateMsg, SignatureMsg,
};
use bridge::{keccak256, signing_hash, BridgeMessage};

pub const DENOM: &str = "uluna";

/// Native coins preloaded into the bridge for releases
pub const BRIDGE_FUNDS: u128 = 1_000_000_000_000;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_migrate(bridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_validators() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        validators::contract::execute,
        validators::contract::instantiate,
        validators::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Validator Keys
// ============================================================================

pub struct TestValidator {
    pub key: SigningKey,
    pub raw: [u8; 20],
}

impl TestValidator {
    /// Deterministic key from a non-zero seed
    pub fn new(seed: u8) -> Self {
        let mut secret = [0u8; 32];
        secret[31] = seed;
        let key = SigningKey::from_slice(&secret).unwrap();

        let point = key.verifying_key().to_encoded_point(false);
        let digest = keccak256(&point.as_bytes()[1..]);
        let mut raw = [0u8; 20];
        raw.copy_from_slice(&digest[12..]);

        Self { key, raw }
    }

    pub fn address(&self) -> String {
        format!("0x{}", hex::encode(self.raw))
    }

    /// Sign the EIP-191 digest of an encoded relay message
    pub fn sign(&self, message: &[u8; 104]) -> SignatureMsg {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(&signing_hash(message))
            .unwrap();
        let bytes = sig.to_bytes();
        SignatureMsg {
            v: 27 + recid.to_byte(),
            r: Binary::from(bytes[..32].to_vec()),
            s: Binary::from(bytes[32..].to_vec()),
        }
    }
}

pub fn test_validators(count: u8) -> Vec<TestValidator> {
    (1..=count).map(TestValidator::new).collect()
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub validators_contract: Addr,
    pub deployer: Addr,
    pub owner: Addr,
    pub user: Addr,
    pub validators: Vec<TestValidator>,
    pub bridge_code_id: u64,
}

/// Limits used unless a test overrides them
pub fn init_msg(validator_contract: &Addr, owner: &Addr) -> InitializeMsg {
    InitializeMsg {
        validator_contract: validator_contract.to_string(),
        daily_limit: Uint128::new(10_000_000),
        max_per_tx: Uint128::new(3_000_000),
        min_per_tx: Uint128::new(1_000),
        gas_price: Uint128::new(1_000_000_000),
        required_block_confirmations: 8,
        execution_daily_limit: Uint128::new(10_000_000),
        execution_max_per_tx: Uint128::new(3_000_000),
        owner: owner.to_string(),
    }
}

/// Deploy validators (`count` keys, `required` threshold) and an initialized bridge
pub fn setup(count: u8, required: u32) -> Suite {
    setup_with(count, required, |_| {})
}

/// Like [`setup`], letting the test adjust the initialize message
pub fn setup_with(count: u8, required: u32, tweak: impl FnOnce(&mut InitializeMsg)) -> Suite {
    let mut suite = deploy(count, required);
    let mut init = init_msg(&suite.validators_contract, &suite.owner);
    tweak(&mut init);

    suite
        .app
        .execute_contract(
            suite.deployer.clone(),
            suite.bridge.clone(),
            &ExecuteMsg::Initialize(init),
            &[],
        )
        .unwrap();
    suite
}

/// Deploy validators and an uninitialized bridge
pub fn deploy(count: u8, required: u32) -> Suite {
    let mut app = App::default();

    let deployer = Addr::unchecked("terra1deployer");
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(100_000_000_000, DENOM))
            .unwrap();
    });

    let keys = test_validators(count);
    let validators_code_id = app.store_code(contract_validators());
    let validators_contract = app
        .instantiate_contract(
            validators_code_id,
            owner.clone(),
            &validators::msg::InstantiateMsg {
                owner: owner.to_string(),
                validators: keys.iter().map(|v| v.address()).collect(),
                required_signatures: required,
            },
            &[],
            "bridge-validators",
            Some(owner.to_string()),
        )
        .unwrap();

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            deployer.clone(),
            &InstantiateMsg {
                native_denom: None,
                address_prefix: None,
                initialize: None,
            },
            &[],
            "foreign-bridge",
            Some(deployer.to_string()),
        )
        .unwrap();

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &bridge, coins(BRIDGE_FUNDS, DENOM))
            .unwrap();
    });

    Suite {
        app,
        bridge,
        validators_contract,
        deployer,
        owner,
        user,
        validators: keys,
        bridge_code_id,
    }
}

impl Suite {
    pub fn instance_id(&self) -> [u8; 20] {
        let res: BridgeInstanceIdResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &bridge::msg::QueryMsg::BridgeInstanceId {})
            .unwrap();
        let bytes = hex::decode(res.bridge_instance_id.trim_start_matches("0x")).unwrap();
        let mut id = [0u8; 20];
        id.copy_from_slice(&bytes);
        id
    }

    /// Encoded relay message for this bridge
    pub fn message(&self, recipient: [u8; 20], amount: u128, source_tx_id: [u8; 32]) -> [u8; 104] {
        BridgeMessage {
            recipient,
            amount: Uint128::new(amount),
            source_tx_id,
            bridge_instance_id: self.instance_id(),
        }
        .encode()
    }

    /// Signatures from the validators at `indexes`, in that order
    pub fn sign(&self, message: &[u8; 104], indexes: &[usize]) -> Vec<SignatureMsg> {
        indexes
            .iter()
            .map(|i| self.validators[*i].sign(message))
            .collect()
    }

    pub fn relay(
        &mut self,
        message: &[u8; 104],
        signatures: Vec<SignatureMsg>,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.bridge.clone(),
            &ExecuteMsg::ExecuteSignatures {
                message: Binary::from(message.to_vec()),
                signatures,
            },
            &[],
        )
    }

    pub fn deposit(&mut self, amount: u128, recipient: &str) -> anyhow::Result<AppResponse> {
        let user = self.user.clone();
        self.app.execute_contract(
            user,
            self.bridge.clone(),
            &ExecuteMsg::Deposit {
                recipient: recipient.to_string(),
            },
            &coins(amount, DENOM),
        )
    }

    pub fn balance(&self, addr: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn advance_days(&mut self, days: u64) {
        self.app
            .update_block(|block| block.time = block.time.plus_seconds(days * 86_400));
    }
}

/// Local address that receives a relay to `raw`
pub fn local_recipient(raw: [u8; 20]) -> String {
    encode_bech32_address(&raw, "terra").unwrap()
}

/// 32-byte id with the given last byte
pub fn tx_id(n: u8) -> [u8; 32] {
    let mut id = [0xeeu8; 32];
    id[31] = n;
    id
}

/// Value of attribute `key` on the first event of type `ty`
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .find(|e| e.ty == ty)
        .and_then(|e| e.attributes.iter().find(|a| a.key == key))
        .map(|a| a.value.clone())
}
