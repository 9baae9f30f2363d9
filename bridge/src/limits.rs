//! Rate limiting over fixed day buckets.
//!
//! The bridge keeps two independent lanes: deposits coming in and relays
//! being executed. Each lane has `min_per_tx <= max_per_tx <= daily_limit`
//! and one running total per day index. A new day index starts from zero;
//! older buckets stay in storage for audit.

use cosmwasm_std::{Env, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::state::{
    Limits, DEPOSIT_LIMITS, EXECUTION_LIMITS, SECONDS_PER_DAY, TOTAL_EXECUTED_PER_DAY,
    TOTAL_SPENT_PER_DAY,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitLane {
    Deposit,
    Execution,
}

impl LimitLane {
    fn limits(self) -> Item<'static, Limits> {
        match self {
            LimitLane::Deposit => DEPOSIT_LIMITS,
            LimitLane::Execution => EXECUTION_LIMITS,
        }
    }

    fn buckets(self) -> Map<'static, u64, Uint128> {
        match self {
            LimitLane::Deposit => TOTAL_SPENT_PER_DAY,
            LimitLane::Execution => TOTAL_EXECUTED_PER_DAY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LimitLane::Deposit => "deposit",
            LimitLane::Execution => "execution",
        }
    }

    /// Prefix of the `..._changed` events emitted by this lane's setters
    pub fn event_prefix(self) -> &'static str {
        match self {
            LimitLane::Deposit => "",
            LimitLane::Execution => "execution_",
        }
    }
}

/// Which limit a setter changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitField {
    DailyLimit,
    MaxPerTx,
    MinPerTx,
}

impl LimitField {
    pub fn name(self) -> &'static str {
        match self {
            LimitField::DailyLimit => "daily_limit",
            LimitField::MaxPerTx => "max_per_tx",
            LimitField::MinPerTx => "min_per_tx",
        }
    }
}

/// Day index of the current block
pub fn current_day(env: &Env) -> u64 {
    env.block.time.seconds() / SECONDS_PER_DAY
}

pub fn validate_limits(lane: LimitLane, limits: &Limits) -> Result<(), ContractError> {
    if limits.min_per_tx > limits.max_per_tx || limits.max_per_tx > limits.daily_limit {
        return Err(ContractError::LimitOrdering {
            lane: lane.name().to_string(),
            min: limits.min_per_tx,
            max: limits.max_per_tx,
            daily: limits.daily_limit,
        });
    }
    Ok(())
}

pub fn load_limits(storage: &dyn Storage, lane: LimitLane) -> StdResult<Limits> {
    lane.limits().load(storage)
}

pub fn save_limits(
    storage: &mut dyn Storage,
    lane: LimitLane,
    limits: &Limits,
) -> Result<(), ContractError> {
    validate_limits(lane, limits)?;
    lane.limits().save(storage, limits)?;
    Ok(())
}

/// Change one limit of a lane, keeping the ordering invariant.
///
/// Already recorded day totals are left untouched.
pub fn update_limit(
    storage: &mut dyn Storage,
    lane: LimitLane,
    field: LimitField,
    value: Uint128,
) -> Result<Limits, ContractError> {
    let mut limits = load_limits(storage, lane)?;
    match field {
        LimitField::DailyLimit => limits.daily_limit = value,
        LimitField::MaxPerTx => limits.max_per_tx = value,
        LimitField::MinPerTx => limits.min_per_tx = value,
    }
    save_limits(storage, lane, &limits)?;
    Ok(limits)
}

pub fn total_for_day(storage: &dyn Storage, lane: LimitLane, day: u64) -> StdResult<Uint128> {
    Ok(lane.buckets().may_load(storage, day)?.unwrap_or_default())
}

/// Check `amount` against a lane without recording it.
///
/// Per-transaction bounds are checked before the daily aggregate, so an
/// amount failing both reports the per-transaction error.
pub fn check(
    storage: &dyn Storage,
    lane: LimitLane,
    day: u64,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let limits = load_limits(storage, lane)?;

    if amount < limits.min_per_tx {
        return Err(ContractError::BelowMinimum {
            amount,
            min: limits.min_per_tx,
        });
    }
    if amount > limits.max_per_tx {
        return Err(ContractError::AboveMaxPerTx {
            amount,
            max: limits.max_per_tx,
        });
    }

    let spent = total_for_day(storage, lane, day)?;
    match spent.checked_add(amount) {
        Ok(total) if total <= limits.daily_limit => Ok(total),
        _ => Err(ContractError::DailyLimitExceeded {
            amount,
            spent,
            limit: limits.daily_limit,
        }),
    }
}

/// Check `amount` and add it to the lane's bucket for `day`.
pub fn reserve(
    storage: &mut dyn Storage,
    lane: LimitLane,
    day: u64,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let total = check(storage, lane, day, amount)?;
    lane.buckets().save(storage, day, &total)?;
    Ok(total)
}

/// Whether `amount` would pass the lane right now
pub fn within_limit(storage: &dyn Storage, lane: LimitLane, day: u64, amount: Uint128) -> bool {
    check(storage, lane, day, amount).is_ok()
}
