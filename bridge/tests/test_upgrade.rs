//! Migration persistence and stray-token claim tests.

mod helpers;

use cosmwasm_std::{coin, Addr, Binary, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20QueryMsg};
use cw_multi_test::Executor;

use bridge::msg::{
    ConfigResponse, DayTotalResponse, DepositResponse, ExecuteMsg, LimitsResponse, MigrateMsg,
    QueryMsg, RelayedMessageResponse,
};
use common::AssetInfo;
use helpers::{contract_bridge, contract_cw20, event_attr, setup, tx_id, Suite, DENOM};

const EVM_RECIPIENT: &str = "0x1111111111111111111111111111111111111111";

fn relayed(suite: &Suite, id: [u8; 32]) -> RelayedMessageResponse {
    suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::RelayedMessage {
                source_tx_id: Binary::from(id.to_vec()),
            },
        )
        .unwrap()
}

// ============================================================================
// Migration
// ============================================================================

#[test]
fn test_migrate_preserves_state() {
    let mut suite = setup(2, 2);
    let raw = [0xdd; 20];

    let message = suite.message(raw, 500_000, tx_id(1));
    let sigs = suite.sign(&message, &[0, 1]);
    suite.relay(&message, sigs).unwrap();
    suite.deposit(2_000_000, EVM_RECIPIENT).unwrap();

    let config_before: ConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Config {})
        .unwrap();
    let limits_before: LimitsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Limits {})
        .unwrap();
    let day = suite.app.block_info().time.seconds() / 86_400;

    let new_code_id = suite.app.store_code(contract_bridge());
    let res = suite
        .app
        .migrate_contract(
            suite.deployer.clone(),
            suite.bridge.clone(),
            &MigrateMsg {},
            new_code_id,
        )
        .unwrap();
    assert_eq!(
        event_attr(&res, "wasm", "action"),
        Some("migrate".to_string())
    );

    // Ledger
    assert!(relayed(&suite, tx_id(1)).relayed);
    let sigs = suite.sign(&message, &[0, 1]);
    let err = suite.relay(&message, sigs).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Message already relayed"));

    // Day buckets
    let executed: DayTotalResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::TotalExecutedPerDay { day })
        .unwrap();
    assert_eq!(executed.total, Uint128::new(500_000));
    let spent: DayTotalResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::TotalSpentPerDay { day })
        .unwrap();
    assert_eq!(spent.total, Uint128::new(2_000_000));

    // Limits and config
    let limits_after: LimitsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Limits {})
        .unwrap();
    assert_eq!(limits_after, limits_before);
    let config_after: ConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config_after, config_before);

    // Deposits keep their nonces
    let deposit: Option<DepositResponse> = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Deposit { nonce: 0 })
        .unwrap();
    assert_eq!(deposit.unwrap().amount, Uint128::new(2_000_000));
    let res = suite.deposit(1_000_000, EVM_RECIPIENT).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-user_request_for_affirmation", "nonce"),
        Some("1".to_string())
    );
}

// ============================================================================
// Claim Tokens
// ============================================================================

#[test]
fn test_claim_stray_cw20() {
    let mut suite = setup(2, 2);
    let cw20_code_id = suite.app.store_code(contract_cw20());
    let token = suite
        .app
        .instantiate_contract(
            cw20_code_id,
            suite.owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Stray Token".to_string(),
                symbol: "STRAY".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: suite.bridge.to_string(),
                    amount: Uint128::new(777),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "stray",
            None,
        )
        .unwrap();

    let treasury = Addr::unchecked("terra1treasury");
    let claim = ExecuteMsg::ClaimTokens {
        asset: AssetInfo::Cw20 {
            contract_addr: token.clone(),
        },
        to: treasury.to_string(),
    };

    let err = suite
        .app
        .execute_contract(suite.user.clone(), suite.bridge.clone(), &claim, &[])
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Unauthorized"));

    let res = suite
        .app
        .execute_contract(suite.owner.clone(), suite.bridge.clone(), &claim, &[])
        .unwrap();
    assert_eq!(
        event_attr(&res, "wasm-tokens_claimed", "amount"),
        Some("777".to_string())
    );

    let balance: BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &token,
            &Cw20QueryMsg::Balance {
                address: treasury.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::new(777));

    // Swept clean
    let err = suite
        .app
        .execute_contract(suite.owner.clone(), suite.bridge.clone(), &claim, &[])
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Nothing to claim");
}

#[test]
fn test_claim_stray_native_denom() {
    let mut suite = setup(2, 2);
    let bridge = suite.bridge.clone();
    suite.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &bridge,
                vec![coin(helpers::BRIDGE_FUNDS, DENOM), coin(4_200, "uusd")],
            )
            .unwrap();
    });

    let treasury = Addr::unchecked("terra1treasury");
    suite
        .app
        .execute_contract(
            suite.owner.clone(),
            bridge.clone(),
            &ExecuteMsg::ClaimTokens {
                asset: AssetInfo::Native {
                    denom: "uusd".to_string(),
                },
                to: treasury.to_string(),
            },
            &[],
        )
        .unwrap();

    let claimed = suite
        .app
        .wrap()
        .query_balance(&treasury, "uusd")
        .unwrap();
    assert_eq!(claimed.amount, Uint128::new(4_200));
    assert_eq!(suite.balance(bridge.as_str()), helpers::BRIDGE_FUNDS);
}

#[test]
fn test_cannot_claim_bridged_denom() {
    let mut suite = setup(2, 2);
    let err = suite
        .app
        .execute_contract(
            suite.owner.clone(),
            suite.bridge.clone(),
            &ExecuteMsg::ClaimTokens {
                asset: AssetInfo::Native {
                    denom: DENOM.to_string(),
                },
                to: suite.owner.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Cannot claim the bridged asset uluna"
    );
}

#[test]
fn test_claim_unheld_native_denom() {
    let mut suite = setup(2, 2);
    let err = suite
        .app
        .execute_contract(
            suite.owner.clone(),
            suite.bridge.clone(),
            &ExecuteMsg::ClaimTokens {
                asset: AssetInfo::Native {
                    denom: "ukrw".to_string(),
                },
                to: suite.owner.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Nothing to claim");
}
