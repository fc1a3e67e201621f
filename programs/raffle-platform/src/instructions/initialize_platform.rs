use anchor_lang::prelude::*;

use crate::{events::PlatformInitialized, state::*};

pub fn initialize_platform(ctx: Context<InitializePlatform>) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    let now = Clock::get()?.unix_timestamp;

    platform.authority = ctx.accounts.authority.key();
    platform.raffle_count = 0;
    platform.staff_count = 0;
    platform.total_tickets_sold = 0;
    platform.total_revenue = 0;
    platform.total_commission = 0;
    platform.created_at = now;
    platform.bump = ctx.bumps.platform;

    emit!(PlatformInitialized {
        authority: platform.authority,
    });

    msg!("Raffle platform initialized, authority: {}", platform.authority);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(
        init,
        payer = authority,
        space = Platform::LEN,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
