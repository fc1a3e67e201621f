use anchor_lang::prelude::*;

use crate::{errors::*, events::RaffleCreated, state::*, utils};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateRaffleParams {
    pub name: String,
    pub description: String,
    pub image_uris: Vec<String>,
    pub draw_date: i64,
    pub ticket_price: u64,
    pub total_tickets: u64,
    pub commission_bps: u16,
    pub start_paused: bool,
}

pub fn create_raffle(ctx: Context<CreateRaffle>, params: CreateRaffleParams) -> Result<()> {
    utils::validate_raffle_name(&params.name)?;
    utils::validate_description(&params.description)?;
    utils::validate_image_uris(&params.image_uris)?;
    utils::validate_ticket_price(params.ticket_price)?;
    utils::validate_total_tickets(params.total_tickets)?;
    utils::validate_commission_bps(params.commission_bps)?;

    let clock = Clock::get()?;
    require!(
        params.draw_date > clock.unix_timestamp,
        RaffleError::DrawDateInPast
    );

    let platform = &mut ctx.accounts.platform;
    let raffle = &mut ctx.accounts.raffle;
    let raffle_id = platform.raffle_count;

    raffle.raffle_id = raffle_id;
    raffle.raffle_code =
        utils::derive_raffle_code(&ctx.accounts.authority.key(), clock.slot, raffle_id);
    raffle.created_by = ctx.accounts.authority.key();
    raffle.name = params.name.clone();
    raffle.description = params.description;
    raffle.image_uris = params.image_uris;
    raffle.draw_date = params.draw_date;
    raffle.ticket_price = params.ticket_price;
    raffle.total_tickets = params.total_tickets;
    raffle.sold_tickets = 0;
    raffle.commission_bps = params.commission_bps;
    raffle.status = if params.start_paused {
        RaffleStatus::Paused
    } else {
        RaffleStatus::Active
    };
    raffle.sales_count = 0;
    raffle.gross_revenue = 0;
    raffle.commission_accrued = 0;
    raffle.winning_ticket = None;
    raffle.created_at = clock.unix_timestamp;
    raffle.updated_at = clock.unix_timestamp;
    raffle.bump = ctx.bumps.raffle;

    platform.raffle_count = utils::safe_add_u64(platform.raffle_count, 1)?;

    emit!(RaffleCreated {
        raffle: raffle.key(),
        raffle_id,
        name: params.name,
        ticket_price: raffle.ticket_price,
        total_tickets: raffle.total_tickets,
        commission_bps: raffle.commission_bps,
        draw_date: raffle.draw_date,
    });

    msg!(
        "Raffle {} created: {} tickets at {} each",
        raffle_id,
        raffle.total_tickets,
        raffle.ticket_price
    );

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
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
        space = Raffle::LEN,
        seeds = [RAFFLE_SEED, platform.raffle_count.to_le_bytes().as_ref()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
