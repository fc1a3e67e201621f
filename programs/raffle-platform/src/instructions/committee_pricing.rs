use anchor_lang::prelude::*;

use crate::{
    errors::*,
    events::{CommitteePricingCleared, CommitteePricingSet},
    state::*,
    utils,
};

pub fn set_committee_pricing(
    ctx: Context<SetCommitteePricing>,
    ticket_price: u64,
    commission_bps: u16,
) -> Result<()> {
    utils::validate_ticket_price(ticket_price)?;
    utils::validate_commission_bps(commission_bps)?;

    let raffle = &ctx.accounts.raffle;
    require!(
        raffle.status != RaffleStatus::Completed,
        RaffleError::RaffleCompleted
    );

    let pricing = &mut ctx.accounts.pricing;
    let now = Clock::get()?.unix_timestamp;

    pricing.upsert(
        raffle.key(),
        ctx.accounts.committee.key(),
        raffle.ticket_price,
        ticket_price,
        commission_bps,
        now,
        ctx.bumps.pricing,
    );

    emit!(CommitteePricingSet {
        raffle: raffle.key(),
        committee: pricing.committee,
        ticket_price,
        commission_bps,
        original_price: pricing.original_price,
    });

    msg!(
        "Committee pricing for raffle {}: price {} ({} bps), admin original {}",
        raffle.raffle_id,
        ticket_price,
        commission_bps,
        pricing.original_price
    );

    Ok(())
}

pub fn clear_committee_pricing(ctx: Context<ClearCommitteePricing>) -> Result<()> {
    let pricing = &mut ctx.accounts.pricing;

    require!(pricing.is_active, RaffleError::PricingInactive);

    pricing.is_active = false;
    pricing.updated_at = Clock::get()?.unix_timestamp;

    emit!(CommitteePricingCleared {
        raffle: pricing.raffle,
        committee: pricing.committee,
    });

    msg!("Committee pricing cleared, sellers fall back to admin pricing");

    Ok(())
}

#[derive(Accounts)]
pub struct SetCommitteePricing<'info> {
    // Read-only on purpose: committee overrides never touch the raffle.
    #[account(
        seeds = [RAFFLE_SEED, raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [STAFF_SEED, committee.key().as_ref()],
        bump = committee_staff.bump,
        constraint = committee_staff.is_active_committee() @ RaffleError::NotACommittee,
    )]
    pub committee_staff: Account<'info, Staff>,

    #[account(
        init_if_needed,
        payer = committee,
        space = CommitteePricing::LEN,
        seeds = [COMMITTEE_PRICING_SEED, raffle.key().as_ref(), committee.key().as_ref()],
        bump
    )]
    pub pricing: Account<'info, CommitteePricing>,

    #[account(mut)]
    pub committee: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ClearCommitteePricing<'info> {
    #[account(
        seeds = [STAFF_SEED, committee.key().as_ref()],
        bump = committee_staff.bump,
        constraint = committee_staff.is_active_committee() @ RaffleError::NotACommittee,
    )]
    pub committee_staff: Account<'info, Staff>,

    #[account(
        mut,
        seeds = [COMMITTEE_PRICING_SEED, pricing.raffle.as_ref(), committee.key().as_ref()],
        bump = pricing.bump,
    )]
    pub pricing: Account<'info, CommitteePricing>,

    pub committee: Signer<'info>,
}
