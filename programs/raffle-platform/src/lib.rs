use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pricing;
pub mod state;
pub mod utils;

use instructions::*;
use state::*;

#[program]
pub mod raffle_platform {
    use super::*;

    pub fn initialize_platform(ctx: Context<InitializePlatform>) -> Result<()> {
        instructions::initialize_platform(ctx)
    }

    pub fn register_committee(
        ctx: Context<RegisterCommittee>,
        full_name: String,
        phone: String,
    ) -> Result<()> {
        instructions::register_committee(ctx, full_name, phone)
    }

    pub fn create_raffle(ctx: Context<CreateRaffle>, params: CreateRaffleParams) -> Result<()> {
        instructions::create_raffle(ctx, params)
    }

    pub fn update_raffle(
        ctx: Context<UpdateRaffle>,
        new_name: Option<String>,
        new_description: Option<String>,
        new_image_uris: Option<Vec<String>>,
        new_draw_date: Option<i64>,
        new_ticket_price: Option<u64>,
        new_commission_bps: Option<u16>,
    ) -> Result<()> {
        instructions::update_raffle(
            ctx,
            new_name,
            new_description,
            new_image_uris,
            new_draw_date,
            new_ticket_price,
            new_commission_bps,
        )
    }

    pub fn set_raffle_status(ctx: Context<UpdateRaffle>, new_status: RaffleStatus) -> Result<()> {
        instructions::set_raffle_status(ctx, new_status)
    }

    pub fn complete_raffle(
        ctx: Context<CompleteRaffle>,
        winning_ticket: Option<u64>,
    ) -> Result<()> {
        instructions::complete_raffle(ctx, winning_ticket)
    }

    pub fn set_committee_pricing(
        ctx: Context<SetCommitteePricing>,
        ticket_price: u64,
        commission_bps: u16,
    ) -> Result<()> {
        instructions::set_committee_pricing(ctx, ticket_price, commission_bps)
    }

    pub fn clear_committee_pricing(ctx: Context<ClearCommitteePricing>) -> Result<()> {
        instructions::clear_committee_pricing(ctx)
    }

    pub fn register_seller(
        ctx: Context<RegisterSeller>,
        full_name: String,
        phone: String,
    ) -> Result<()> {
        instructions::register_seller(ctx, full_name, phone)
    }

    pub fn set_seller_status(
        ctx: Context<SetSellerStatus>,
        new_status: StaffStatus,
    ) -> Result<()> {
        instructions::set_seller_status(ctx, new_status)
    }

    pub fn remove_seller(ctx: Context<RemoveSeller>) -> Result<()> {
        instructions::remove_seller(ctx)
    }

    pub fn record_sale(ctx: Context<RecordSale>, params: RecordSaleParams) -> Result<()> {
        instructions::record_sale(ctx, params)
    }

    pub fn cancel_sale(ctx: Context<CancelSale>) -> Result<()> {
        instructions::cancel_sale(ctx)
    }
}
