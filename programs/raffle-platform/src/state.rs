use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;

use crate::constants::*;
use crate::utils;

#[account]
pub struct Platform {
    pub authority: Pubkey,
    pub raffle_count: u64,
    pub staff_count: u64,
    pub total_tickets_sold: u64,
    pub total_revenue: u64,
    pub total_commission: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Platform {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 +  // raffle_count
        8 +  // staff_count
        8 +  // total_tickets_sold
        8 +  // total_revenue
        8 +  // total_commission
        8 +  // created_at
        1 +  // bump
        64;  // padding for future expansion

    pub fn apply_sale(
        &mut self,
        quantity: u64,
        total_amount: u64,
        commission_amount: u64,
    ) -> Result<()> {
        self.total_tickets_sold = utils::safe_add_u64(self.total_tickets_sold, quantity)?;
        self.total_revenue = utils::safe_add_u64(self.total_revenue, total_amount)?;
        self.total_commission = utils::safe_add_u64(self.total_commission, commission_amount)?;
        Ok(())
    }

    /// Cancelled tickets stay consumed, so only the money moves back.
    pub fn reverse_sale(&mut self, total_amount: u64, commission_amount: u64) -> Result<()> {
        self.total_revenue = utils::safe_sub_u64(self.total_revenue, total_amount)?;
        self.total_commission = utils::safe_sub_u64(self.total_commission, commission_amount)?;
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleStatus {
    Active,
    Paused,
    Completed,
}

#[account]
pub struct Raffle {
    pub raffle_id: u64,
    pub raffle_code: [u8; 32],
    pub created_by: Pubkey,
    pub name: String,
    pub description: String,
    pub image_uris: Vec<String>,
    pub draw_date: i64,
    pub ticket_price: u64,
    pub total_tickets: u64,
    pub sold_tickets: u64,
    pub commission_bps: u16,
    pub status: RaffleStatus,
    pub sales_count: u64,
    pub gross_revenue: u64,
    pub commission_accrued: u64,
    pub winning_ticket: Option<u64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Raffle {
    pub const LEN: usize = 8 + // discriminator
        8 +  // raffle_id
        32 + // raffle_code
        32 + // created_by
        4 + MAX_NAME_LENGTH +        // name
        4 + MAX_DESCRIPTION_LENGTH + // description
        4 + MAX_IMAGES_COUNT * (4 + MAX_URI_LENGTH) + // image_uris
        8 +  // draw_date
        8 +  // ticket_price
        8 +  // total_tickets
        8 +  // sold_tickets
        2 +  // commission_bps
        1 +  // status
        8 +  // sales_count
        8 +  // gross_revenue
        8 +  // commission_accrued
        1 + 8 + // winning_ticket
        8 +  // created_at
        8 +  // updated_at
        1 +  // bump
        64;  // padding

    pub fn tickets_available(&self) -> u64 {
        self.total_tickets.saturating_sub(self.sold_tickets)
    }

    /// A raffle accepts sales only while active and before the draw.
    pub fn is_open(&self, now: i64) -> bool {
        self.status == RaffleStatus::Active && self.draw_date > now
    }

    pub fn apply_sale(
        &mut self,
        quantity: u64,
        total_amount: u64,
        commission_amount: u64,
    ) -> Result<()> {
        self.sold_tickets = utils::safe_add_u64(self.sold_tickets, quantity)?;
        self.sales_count = utils::safe_add_u64(self.sales_count, 1)?;
        self.gross_revenue = utils::safe_add_u64(self.gross_revenue, total_amount)?;
        self.commission_accrued = utils::safe_add_u64(self.commission_accrued, commission_amount)?;
        Ok(())
    }

    /// Ticket and sale counters stay put: cancelled ticket numbers are
    /// consumed, never reissued.
    pub fn reverse_sale(&mut self, total_amount: u64, commission_amount: u64) -> Result<()> {
        self.gross_revenue = utils::safe_sub_u64(self.gross_revenue, total_amount)?;
        self.commission_accrued = utils::safe_sub_u64(self.commission_accrued, commission_amount)?;
        Ok(())
    }
}

/// Committee pricing override for a single raffle. The admin's original
/// numbers stay untouched on the `Raffle` account; this record holds the
/// committee's values and a snapshot of the admin price it superseded.
#[account]
pub struct CommitteePricing {
    pub raffle: Pubkey,
    pub committee: Pubkey,
    pub ticket_price: u64,
    pub commission_bps: u16,
    pub original_price: u64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl CommitteePricing {
    pub const LEN: usize = 8 + // discriminator
        32 + // raffle
        32 + // committee
        8 +  // ticket_price
        2 +  // commission_bps
        8 +  // original_price
        1 +  // is_active
        8 +  // created_at
        8 +  // updated_at
        1 +  // bump
        32;  // padding

    /// Upsert for the committee's numbers. The first write snapshots the
    /// admin price as `original_price`; later writes leave the snapshot and
    /// the creation time alone and only move the committee's own values.
    pub fn upsert(
        &mut self,
        raffle: Pubkey,
        committee: Pubkey,
        admin_price: u64,
        ticket_price: u64,
        commission_bps: u16,
        now: i64,
        bump: u8,
    ) {
        if self.created_at == 0 {
            self.raffle = raffle;
            self.committee = committee;
            self.original_price = admin_price;
            self.created_at = now;
            self.bump = bump;
        }

        self.ticket_price = ticket_price;
        self.commission_bps = commission_bps;
        self.is_active = true;
        self.updated_at = now;
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StaffRole {
    Committee,
    Seller,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StaffStatus {
    Active,
    Suspended,
}

#[account]
pub struct Staff {
    pub wallet: Pubkey,
    /// Committee that registered this seller; default pubkey for committees.
    pub supervisor: Pubkey,
    pub role: StaffRole,
    pub status: StaffStatus,
    pub full_name: String,
    pub phone: String,
    pub sales_count: u64,
    pub tickets_sold: u64,
    pub commission_earned: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Staff {
    pub const LEN: usize = 8 + // discriminator
        32 + // wallet
        32 + // supervisor
        1 +  // role
        1 +  // status
        4 + MAX_FULL_NAME_LENGTH + // full_name
        4 + MAX_PHONE_LENGTH +     // phone
        8 +  // sales_count
        8 +  // tickets_sold
        8 +  // commission_earned
        8 +  // created_at
        1 +  // bump
        32;  // padding

    pub fn is_active_committee(&self) -> bool {
        self.role == StaffRole::Committee && self.status == StaffStatus::Active
    }

    pub fn is_active_seller(&self) -> bool {
        self.role == StaffRole::Seller && self.status == StaffStatus::Active
    }

    pub fn apply_sale(&mut self, quantity: u64, commission_amount: u64) -> Result<()> {
        self.sales_count = utils::safe_add_u64(self.sales_count, 1)?;
        self.tickets_sold = utils::safe_add_u64(self.tickets_sold, quantity)?;
        self.commission_earned = utils::safe_add_u64(self.commission_earned, commission_amount)?;
        Ok(())
    }

    /// Only the commission comes back. The sale and ticket history stays so
    /// the counters keep matching the platform totals and a seller with
    /// cancelled sales still cannot be removed.
    pub fn reverse_sale(&mut self, commission_amount: u64) -> Result<()> {
        self.commission_earned = utils::safe_sub_u64(self.commission_earned, commission_amount)?;
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Card,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaleStatus {
    Completed,
    Cancelled,
}

#[account]
pub struct Sale {
    pub raffle: Pubkey,
    pub seller: Pubkey,
    pub sale_id: u64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub total_amount: u64,
    pub commission_bps: u16,
    pub commission_amount: u64,
    pub payment_method: PaymentMethod,
    pub cash_received: u64,
    pub change_amount: u64,
    pub first_ticket: u64,
    pub last_ticket: u64,
    /// Committee whose pricing applied, if any.
    pub committee: Option<Pubkey>,
    /// Admin price at the time of sale, kept alongside the effective price.
    pub original_unit_price: u64,
    pub status: SaleStatus,
    pub notes: String,
    pub created_at: i64,
    pub bump: u8,
}

impl Sale {
    pub const LEN: usize = 8 + // discriminator
        32 + // raffle
        32 + // seller
        8 +  // sale_id
        4 + MAX_FULL_NAME_LENGTH + // customer_name
        4 + MAX_PHONE_LENGTH +     // customer_phone
        4 + MAX_EMAIL_LENGTH +     // customer_email
        8 +  // quantity
        8 +  // unit_price
        8 +  // total_amount
        2 +  // commission_bps
        8 +  // commission_amount
        1 +  // payment_method
        8 +  // cash_received
        8 +  // change_amount
        8 +  // first_ticket
        8 +  // last_ticket
        1 + 32 + // committee
        8 +  // original_unit_price
        1 +  // status
        4 + MAX_NOTES_LENGTH + // notes
        8 +  // created_at
        1 +  // bump
        32;  // padding

    pub fn ticket_numbers(&self) -> std::ops::RangeInclusive<u64> {
        self.first_ticket..=self.last_ticket
    }
}

pub const PLATFORM_SEED: &[u8] = b"platform";
pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const COMMITTEE_PRICING_SEED: &[u8] = b"committee_pricing";
pub const STAFF_SEED: &[u8] = b"staff";
pub const SALE_SEED: &[u8] = b"sale";

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Platform {
        Platform {
            authority: Pubkey::new_unique(),
            raffle_count: 1,
            staff_count: 1,
            total_tickets_sold: 0,
            total_revenue: 0,
            total_commission: 0,
            created_at: 0,
            bump: 255,
        }
    }

    fn raffle() -> Raffle {
        Raffle {
            raffle_id: 0,
            raffle_code: [0u8; 32],
            created_by: Pubkey::new_unique(),
            name: "iPhone 15 Pro Max".to_string(),
            description: String::new(),
            image_uris: vec![],
            draw_date: 2_000_000_000,
            ticket_price: 5_000,
            total_tickets: 1_000,
            sold_tickets: 0,
            commission_bps: 1_000,
            status: RaffleStatus::Active,
            sales_count: 0,
            gross_revenue: 0,
            commission_accrued: 0,
            winning_ticket: None,
            created_at: 0,
            updated_at: 0,
            bump: 255,
        }
    }

    fn seller() -> Staff {
        Staff {
            wallet: Pubkey::new_unique(),
            supervisor: Pubkey::new_unique(),
            role: StaffRole::Seller,
            status: StaffStatus::Active,
            full_name: "Juan Perez".to_string(),
            phone: String::new(),
            sales_count: 0,
            tickets_sold: 0,
            commission_earned: 0,
            created_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn cancellation_reverses_money_but_keeps_tickets_consumed() {
        let mut platform = platform();
        let mut raffle = raffle();
        let mut seller = seller();

        raffle.apply_sale(5, 25_000, 2_500).unwrap();
        seller.apply_sale(5, 2_500).unwrap();
        platform.apply_sale(5, 25_000, 2_500).unwrap();

        assert_eq!(raffle.sold_tickets, 5);
        assert_eq!(raffle.gross_revenue, 25_000);
        assert_eq!(platform.total_revenue, 25_000);

        raffle.reverse_sale(25_000, 2_500).unwrap();
        seller.reverse_sale(2_500).unwrap();
        platform.reverse_sale(25_000, 2_500).unwrap();

        // Money is back out of the books on every ledger.
        assert_eq!(raffle.gross_revenue, 0);
        assert_eq!(raffle.commission_accrued, 0);
        assert_eq!(seller.commission_earned, 0);
        assert_eq!(platform.total_revenue, 0);
        assert_eq!(platform.total_commission, 0);

        // Ticket numbers stay consumed and the counters stay in step.
        assert_eq!(raffle.sold_tickets, 5);
        assert_eq!(raffle.sales_count, 1);
        assert_eq!(seller.tickets_sold, 5);
        assert_eq!(platform.total_tickets_sold, seller.tickets_sold);

        // The seller keeps their history, so removal stays blocked.
        assert_eq!(seller.sales_count, 1);
    }

    #[test]
    fn reversal_of_unknown_sale_underflows() {
        let mut raffle = raffle();
        assert!(raffle.reverse_sale(1, 0).is_err());

        let mut seller = seller();
        assert!(seller.reverse_sale(1).is_err());
    }

    #[test]
    fn committee_pricing_upsert_snapshots_the_admin_price_once() {
        let raffle_key = Pubkey::new_unique();
        let committee = Pubkey::new_unique();
        let mut pricing = CommitteePricing {
            raffle: Pubkey::default(),
            committee: Pubkey::default(),
            ticket_price: 0,
            commission_bps: 0,
            original_price: 0,
            is_active: false,
            created_at: 0,
            updated_at: 0,
            bump: 0,
        };

        pricing.upsert(raffle_key, committee, 5_000, 6_500, 1_500, 10, 254);
        assert_eq!(pricing.raffle, raffle_key);
        assert_eq!(pricing.committee, committee);
        assert_eq!(pricing.original_price, 5_000);
        assert_eq!(pricing.created_at, 10);
        assert!(pricing.is_active);

        // Cleared, then re-set after the admin changed the raffle price.
        pricing.is_active = false;
        pricing.upsert(raffle_key, committee, 7_000, 6_000, 1_200, 20, 254);

        assert_eq!(pricing.ticket_price, 6_000);
        assert_eq!(pricing.commission_bps, 1_200);
        assert_eq!(pricing.updated_at, 20);
        assert!(pricing.is_active);
        // The snapshot and creation time never move.
        assert_eq!(pricing.original_price, 5_000);
        assert_eq!(pricing.created_at, 10);
    }

    #[test]
    fn availability_shrinks_with_sales() {
        let mut raffle = raffle();
        assert_eq!(raffle.tickets_available(), 1_000);
        raffle.apply_sale(680, 3_400_000, 340_000).unwrap();
        assert_eq!(raffle.tickets_available(), 320);
    }
}
