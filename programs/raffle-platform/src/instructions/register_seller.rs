use anchor_lang::prelude::*;

use crate::{errors::*, events::SellerRegistered, state::*, utils};

pub fn register_seller(
    ctx: Context<RegisterSeller>,
    full_name: String,
    phone: String,
) -> Result<()> {
    utils::validate_full_name(&full_name)?;
    utils::validate_phone(&phone)?;

    let staff = &mut ctx.accounts.staff;
    staff.wallet = ctx.accounts.wallet.key();
    staff.supervisor = ctx.accounts.committee.key();
    staff.role = StaffRole::Seller;
    staff.status = StaffStatus::Active;
    staff.full_name = full_name.clone();
    staff.phone = phone;
    staff.sales_count = 0;
    staff.tickets_sold = 0;
    staff.commission_earned = 0;
    staff.created_at = Clock::get()?.unix_timestamp;
    staff.bump = ctx.bumps.staff;

    let platform = &mut ctx.accounts.platform;
    platform.staff_count = utils::safe_add_u64(platform.staff_count, 1)?;

    emit!(SellerRegistered {
        wallet: staff.wallet,
        supervisor: staff.supervisor,
        full_name,
    });

    msg!(
        "Seller {} registered under committee {}",
        staff.wallet,
        staff.supervisor
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterSeller<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [STAFF_SEED, committee.key().as_ref()],
        bump = committee_staff.bump,
        constraint = committee_staff.is_active_committee() @ RaffleError::NotACommittee,
    )]
    pub committee_staff: Account<'info, Staff>,

    #[account(
        init,
        payer = committee,
        space = Staff::LEN,
        seeds = [STAFF_SEED, wallet.key().as_ref()],
        bump
    )]
    pub staff: Account<'info, Staff>,

    /// CHECK: Only used as the staff account's key.
    pub wallet: UncheckedAccount<'info>,

    #[account(mut)]
    pub committee: Signer<'info>,

    pub system_program: Program<'info, System>,
}
