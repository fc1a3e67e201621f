use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
}

#[event]
pub struct CommitteeRegistered {
    pub wallet: Pubkey,
    pub full_name: String,
}

#[event]
pub struct RaffleCreated {
    pub raffle: Pubkey,
    pub raffle_id: u64,
    pub name: String,
    pub ticket_price: u64,
    pub total_tickets: u64,
    pub commission_bps: u16,
    pub draw_date: i64,
}

#[event]
pub struct RaffleUpdated {
    pub raffle: Pubkey,
    pub ticket_price: u64,
    pub commission_bps: u16,
    pub draw_date: i64,
}

#[event]
pub struct RaffleStatusChanged {
    pub raffle: Pubkey,
    pub status: u8,
}

#[event]
pub struct RaffleCompleted {
    pub raffle: Pubkey,
    pub sold_tickets: u64,
    pub gross_revenue: u64,
    pub winning_ticket: Option<u64>,
}

#[event]
pub struct CommitteePricingSet {
    pub raffle: Pubkey,
    pub committee: Pubkey,
    pub ticket_price: u64,
    pub commission_bps: u16,
    pub original_price: u64,
}

#[event]
pub struct CommitteePricingCleared {
    pub raffle: Pubkey,
    pub committee: Pubkey,
}

#[event]
pub struct SellerRegistered {
    pub wallet: Pubkey,
    pub supervisor: Pubkey,
    pub full_name: String,
}

#[event]
pub struct SellerStatusChanged {
    pub wallet: Pubkey,
    pub status: u8,
}

#[event]
pub struct SellerRemoved {
    pub wallet: Pubkey,
    pub supervisor: Pubkey,
}

#[event]
pub struct TicketsSold {
    pub sale: Pubkey,
    pub raffle: Pubkey,
    pub seller: Pubkey,
    pub sale_id: u64,
    pub quantity: u64,
    pub unit_price: u64,
    pub total_amount: u64,
    pub commission_amount: u64,
    pub first_ticket: u64,
    pub last_ticket: u64,
    pub committee: Option<Pubkey>,
}

#[event]
pub struct SaleCancelled {
    pub sale: Pubkey,
    pub raffle: Pubkey,
    pub seller: Pubkey,
    pub quantity: u64,
    pub total_amount: u64,
}
