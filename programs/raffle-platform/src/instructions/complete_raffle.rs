use anchor_lang::prelude::*;

use crate::{errors::*, events::RaffleCompleted, state::*, utils};

pub fn complete_raffle(ctx: Context<CompleteRaffle>, winning_ticket: Option<u64>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let now = Clock::get()?.unix_timestamp;

    require!(
        raffle.status != RaffleStatus::Completed,
        RaffleError::RaffleCompleted
    );
    require!(now >= raffle.draw_date, RaffleError::DrawDateNotReached);

    utils::validate_winning_ticket(winning_ticket, raffle.sold_tickets)?;

    raffle.status = RaffleStatus::Completed;
    raffle.winning_ticket = winning_ticket;
    raffle.updated_at = now;

    emit!(RaffleCompleted {
        raffle: raffle.key(),
        sold_tickets: raffle.sold_tickets,
        gross_revenue: raffle.gross_revenue,
        winning_ticket,
    });

    match winning_ticket {
        Some(ticket) => msg!("Raffle {} completed, winning ticket {}", raffle.raffle_id, ticket),
        None => msg!("Raffle {} completed with no winner recorded", raffle.raffle_id),
    }

    Ok(())
}

#[derive(Accounts)]
pub struct CompleteRaffle<'info> {
    #[account(
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

    pub authority: Signer<'info>,
}
