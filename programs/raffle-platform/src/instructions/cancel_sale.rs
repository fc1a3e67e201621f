use anchor_lang::prelude::*;

use crate::{errors::*, events::SaleCancelled, state::*};

/// Backs a sale out of the books. The ticket numbers it consumed are not
/// reissued, so the per-raffle sequence stays gapless and unique.
pub fn cancel_sale(ctx: Context<CancelSale>) -> Result<()> {
    let sale = &mut ctx.accounts.sale;
    let raffle = &mut ctx.accounts.raffle;
    let seller_staff = &mut ctx.accounts.seller_staff;

    require!(
        sale.status == SaleStatus::Completed,
        RaffleError::SaleAlreadyCancelled
    );

    sale.status = SaleStatus::Cancelled;

    raffle.reverse_sale(sale.total_amount, sale.commission_amount)?;
    raffle.updated_at = Clock::get()?.unix_timestamp;

    // The seller's sale and ticket counters stay: the history still exists,
    // platform totals keep matching the per-seller totals, and the removal
    // guard keeps seeing the recorded sales.
    seller_staff.reverse_sale(sale.commission_amount)?;

    let platform = &mut ctx.accounts.platform;
    platform.reverse_sale(sale.total_amount, sale.commission_amount)?;

    emit!(SaleCancelled {
        sale: sale.key(),
        raffle: raffle.key(),
        seller: sale.seller,
        quantity: sale.quantity,
        total_amount: sale.total_amount,
    });

    msg!(
        "Sale {} of raffle {} cancelled, tickets [{}-{}] stay consumed",
        sale.sale_id,
        raffle.raffle_id,
        sale.first_ticket,
        sale.last_ticket
    );

    Ok(())
}

#[derive(Accounts)]
pub struct CancelSale<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = authority @ RaffleError::InvalidAuthority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [SALE_SEED, raffle.key().as_ref(), sale.sale_id.to_le_bytes().as_ref()],
        bump = sale.bump,
        constraint = sale.raffle == raffle.key() @ RaffleError::SaleRaffleMismatch,
    )]
    pub sale: Account<'info, Sale>,

    #[account(
        mut,
        seeds = [STAFF_SEED, sale.seller.as_ref()],
        bump = seller_staff.bump,
        constraint = seller_staff.wallet == sale.seller @ RaffleError::SellerMismatch,
    )]
    pub seller_staff: Account<'info, Staff>,

    pub authority: Signer<'info>,
}
