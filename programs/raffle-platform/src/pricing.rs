use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::RaffleError;
use crate::state::{CommitteePricing, PaymentMethod, Raffle};

/// Pricing applied to a sale after resolving the committee override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePricing {
    pub unit_price: u64,
    pub commission_bps: u16,
    pub original_unit_price: u64,
    pub committee: Option<Pubkey>,
}

/// Resolve the price and commission a seller transacts at. An active
/// committee override wins; otherwise the admin's raffle values apply.
/// The admin price is always carried through as `original_unit_price`.
pub fn resolve(raffle: &Raffle, committee_pricing: Option<&CommitteePricing>) -> EffectivePricing {
    match committee_pricing {
        Some(pricing) if pricing.is_active => EffectivePricing {
            unit_price: pricing.ticket_price,
            commission_bps: pricing.commission_bps,
            original_unit_price: raffle.ticket_price,
            committee: Some(pricing.committee),
        },
        _ => EffectivePricing {
            unit_price: raffle.ticket_price,
            commission_bps: raffle.commission_bps,
            original_unit_price: raffle.ticket_price,
            committee: None,
        },
    }
}

/// Commission owed on a sale total, in minor units. Intermediate math is
/// widened to u128 so a max-priced bulk sale cannot overflow.
pub fn commission_amount(total_amount: u64, commission_bps: u16) -> Result<u64> {
    let amount = (total_amount as u128)
        .checked_mul(commission_bps as u128)
        .and_then(|v| v.checked_div(BPS_DENOMINATOR as u128))
        .ok_or(RaffleError::MathematicalOverflow)?;

    u64::try_from(amount).map_err(|_| RaffleError::MathematicalOverflow.into())
}

/// Cash tendered against the sale total. Cash sales must cover the total and
/// record the change handed back; transfers and card payments carry no cash.
pub fn settle_payment(
    payment_method: PaymentMethod,
    cash_received: u64,
    total_amount: u64,
) -> Result<(u64, u64)> {
    match payment_method {
        PaymentMethod::Cash => {
            require!(cash_received >= total_amount, RaffleError::InsufficientCash);
            let change = cash_received
                .checked_sub(total_amount)
                .ok_or(RaffleError::MathematicalOverflow)?;
            Ok((cash_received, change))
        }
        PaymentMethod::Transfer | PaymentMethod::Card => Ok((0, 0)),
    }
}
