use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::TicketsSold, pricing, state::*, utils};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct RecordSaleParams {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub quantity: u64,
    pub payment_method: PaymentMethod,
    pub cash_received: u64,
    pub notes: String,
}

pub fn record_sale(ctx: Context<RecordSale>, params: RecordSaleParams) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let seller_staff = &mut ctx.accounts.seller_staff;
    let now = Clock::get()?.unix_timestamp;

    require!(
        raffle.status == RaffleStatus::Active,
        RaffleError::RaffleNotActive
    );
    require!(raffle.draw_date > now, RaffleError::DrawDatePassed);
    require!(
        seller_staff.role == StaffRole::Seller,
        RaffleError::NotASeller
    );
    require!(
        seller_staff.status == StaffStatus::Active,
        RaffleError::StaffSuspended
    );

    require!(
        !params.customer_name.is_empty(),
        RaffleError::MissingCustomerName
    );
    require!(
        params.customer_name.len() <= MAX_FULL_NAME_LENGTH,
        RaffleError::CustomerFieldTooLong
    );
    require!(
        !params.customer_phone.is_empty(),
        RaffleError::MissingCustomerPhone
    );
    require!(
        params.customer_phone.len() <= MAX_PHONE_LENGTH,
        RaffleError::CustomerFieldTooLong
    );
    require!(
        params.customer_email.len() <= MAX_EMAIL_LENGTH,
        RaffleError::CustomerFieldTooLong
    );
    require!(
        params.notes.len() <= MAX_NOTES_LENGTH,
        RaffleError::NotesTooLong
    );

    utils::validate_quantity(params.quantity, raffle.tickets_available())?;

    // The conditional join: an active committee override beats the admin
    // price, and the admin price rides along on the sale record either way.
    if let Some(committee_pricing) = &ctx.accounts.committee_pricing {
        require!(
            committee_pricing.raffle == raffle.key(),
            RaffleError::PricingRaffleMismatch
        );
    }
    let resolved = pricing::resolve(raffle, ctx.accounts.committee_pricing.as_deref());

    let total_amount = utils::safe_mul_u64(resolved.unit_price, params.quantity)?;
    let commission_amount = pricing::commission_amount(total_amount, resolved.commission_bps)?;

    let (cash_received, change_amount) =
        pricing::settle_payment(params.payment_method, params.cash_received, total_amount)?;

    let (first_ticket, last_ticket) = utils::ticket_range(raffle.sold_tickets, params.quantity)?;

    let sale = &mut ctx.accounts.sale;
    sale.raffle = raffle.key();
    sale.seller = ctx.accounts.seller.key();
    sale.sale_id = raffle.sales_count;
    sale.customer_name = params.customer_name.clone();
    sale.customer_phone = params.customer_phone;
    sale.customer_email = params.customer_email;
    sale.quantity = params.quantity;
    sale.unit_price = resolved.unit_price;
    sale.total_amount = total_amount;
    sale.commission_bps = resolved.commission_bps;
    sale.commission_amount = commission_amount;
    sale.payment_method = params.payment_method;
    sale.cash_received = cash_received;
    sale.change_amount = change_amount;
    sale.first_ticket = first_ticket;
    sale.last_ticket = last_ticket;
    sale.committee = resolved.committee;
    sale.original_unit_price = resolved.original_unit_price;
    sale.status = SaleStatus::Completed;
    sale.notes = params.notes;
    sale.created_at = now;
    sale.bump = ctx.bumps.sale;

    raffle.apply_sale(params.quantity, total_amount, commission_amount)?;
    raffle.updated_at = now;

    seller_staff.apply_sale(params.quantity, commission_amount)?;

    let platform = &mut ctx.accounts.platform;
    platform.apply_sale(params.quantity, total_amount, commission_amount)?;

    emit!(TicketsSold {
        sale: sale.key(),
        raffle: raffle.key(),
        seller: sale.seller,
        sale_id: sale.sale_id,
        quantity: sale.quantity,
        unit_price: sale.unit_price,
        total_amount,
        commission_amount,
        first_ticket,
        last_ticket,
        committee: sale.committee,
    });

    msg!(
        "Sale {}: {} tickets [{}-{}] of raffle '{}' to {} - total {} commission {}",
        sale.sale_id,
        sale.quantity,
        first_ticket,
        last_ticket,
        raffle.name,
        params.customer_name,
        total_amount,
        commission_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RecordSale<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
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
        seeds = [STAFF_SEED, seller.key().as_ref()],
        bump = seller_staff.bump,
    )]
    pub seller_staff: Account<'info, Staff>,

    #[account(
        init,
        payer = seller,
        space = Sale::LEN,
        seeds = [SALE_SEED, raffle.key().as_ref(), raffle.sales_count.to_le_bytes().as_ref()],
        bump
    )]
    pub sale: Account<'info, Sale>,

    #[account(mut)]
    pub seller: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Committee pricing override for the raffle, when one exists.
    pub committee_pricing: Option<Account<'info, CommitteePricing>>,
}
