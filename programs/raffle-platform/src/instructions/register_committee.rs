use anchor_lang::prelude::*;

use crate::{errors::*, events::CommitteeRegistered, state::*, utils};

pub fn register_committee(
    ctx: Context<RegisterCommittee>,
    full_name: String,
    phone: String,
) -> Result<()> {
    utils::validate_full_name(&full_name)?;
    utils::validate_phone(&phone)?;

    let staff = &mut ctx.accounts.staff;
    staff.wallet = ctx.accounts.wallet.key();
    staff.supervisor = Pubkey::default();
    staff.role = StaffRole::Committee;
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

    emit!(CommitteeRegistered {
        wallet: staff.wallet,
        full_name,
    });

    msg!("Committee registered: {}", staff.wallet);

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterCommittee<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = authority @ RaffleError::InvalidAuthority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = authority,
        space = Staff::LEN,
        seeds = [STAFF_SEED, wallet.key().as_ref()],
        bump
    )]
    pub staff: Account<'info, Staff>,

    /// CHECK: Only used as the staff account's key.
    pub wallet: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
