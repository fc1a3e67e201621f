use anchor_lang::prelude::*;

use crate::{
    errors::*,
    events::{SellerRemoved, SellerStatusChanged},
    state::*,
    utils,
};

pub fn set_seller_status(ctx: Context<SetSellerStatus>, new_status: StaffStatus) -> Result<()> {
    let seller_staff = &mut ctx.accounts.seller_staff;

    seller_staff.status = new_status;

    emit!(SellerStatusChanged {
        wallet: seller_staff.wallet,
        status: new_status as u8,
    });

    msg!("Seller {} status set to {:?}", seller_staff.wallet, new_status);

    Ok(())
}

pub fn remove_seller(ctx: Context<RemoveSeller>) -> Result<()> {
    let seller_staff = &ctx.accounts.seller_staff;

    // Sellers with history stay on record; suspend them instead.
    require!(seller_staff.sales_count == 0, RaffleError::SellerHasSales);

    let platform = &mut ctx.accounts.platform;
    platform.staff_count = utils::safe_sub_u64(platform.staff_count, 1)?;

    emit!(SellerRemoved {
        wallet: seller_staff.wallet,
        supervisor: seller_staff.supervisor,
    });

    msg!("Seller {} removed", seller_staff.wallet);

    Ok(())
}

#[derive(Accounts)]
pub struct SetSellerStatus<'info> {
    #[account(
        seeds = [STAFF_SEED, committee.key().as_ref()],
        bump = committee_staff.bump,
        constraint = committee_staff.is_active_committee() @ RaffleError::NotACommittee,
    )]
    pub committee_staff: Account<'info, Staff>,

    #[account(
        mut,
        seeds = [STAFF_SEED, seller_staff.wallet.as_ref()],
        bump = seller_staff.bump,
        constraint = seller_staff.role == StaffRole::Seller @ RaffleError::NotASeller,
        constraint = seller_staff.supervisor == committee.key() @ RaffleError::SupervisorMismatch,
    )]
    pub seller_staff: Account<'info, Staff>,

    pub committee: Signer<'info>,
}

#[derive(Accounts)]
pub struct RemoveSeller<'info> {
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
        mut,
        close = committee,
        seeds = [STAFF_SEED, seller_staff.wallet.as_ref()],
        bump = seller_staff.bump,
        constraint = seller_staff.role == StaffRole::Seller @ RaffleError::NotASeller,
        constraint = seller_staff.supervisor == committee.key() @ RaffleError::SupervisorMismatch,
    )]
    pub seller_staff: Account<'info, Staff>,

    #[account(mut)]
    pub committee: Signer<'info>,
}
