use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;

use crate::constants::*;
use crate::errors::RaffleError;

pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| RaffleError::MathematicalOverflow.into())
}

pub fn safe_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b)
        .ok_or_else(|| RaffleError::MathematicalOverflow.into())
}

pub fn safe_mul_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b)
        .ok_or_else(|| RaffleError::MathematicalOverflow.into())
}

/// Opaque per-raffle code derived from the creator, the slot, and the
/// sequential id. Stands in for a human-issued reference number.
pub fn derive_raffle_code(created_by: &Pubkey, slot: u64, raffle_id: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(created_by.as_ref());
    hasher.update(slot.to_le_bytes());
    hasher.update(raffle_id.to_le_bytes());

    let digest = hasher.finalize();
    let mut code = [0u8; 32];
    code.copy_from_slice(&digest);
    code
}

/// Consecutive ticket numbers for a sale of `quantity` tickets when
/// `sold_tickets` have already been assigned. Numbering starts at 1.
pub fn ticket_range(sold_tickets: u64, quantity: u64) -> Result<(u64, u64)> {
    let first = safe_add_u64(sold_tickets, 1)?;
    let last = safe_add_u64(sold_tickets, quantity)?;
    Ok((first, last))
}

pub fn validate_quantity(quantity: u64, available: u64) -> Result<()> {
    require!(quantity > 0, RaffleError::InvalidQuantity);
    require!(quantity <= available, RaffleError::InsufficientTickets);
    Ok(())
}

/// A recorded winner must be one of the tickets actually sold; raffles that
/// closed without sales record no winner.
pub fn validate_winning_ticket(winning_ticket: Option<u64>, sold_tickets: u64) -> Result<()> {
    if let Some(ticket) = winning_ticket {
        require!(
            ticket >= 1 && ticket <= sold_tickets,
            RaffleError::InvalidWinningTicket
        );
    }
    Ok(())
}

pub fn validate_raffle_name(name: &str) -> Result<()> {
    require!(
        name.len() >= MIN_NAME_LENGTH && name.len() <= MAX_NAME_LENGTH,
        RaffleError::InvalidRaffleName
    );
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LENGTH,
        RaffleError::DescriptionTooLong
    );
    Ok(())
}

pub fn validate_image_uris(image_uris: &[String]) -> Result<()> {
    require!(!image_uris.is_empty(), RaffleError::MissingImages);
    require!(
        image_uris.len() <= MAX_IMAGES_COUNT,
        RaffleError::TooManyImages
    );

    for uri in image_uris {
        require!(
            !uri.is_empty() && uri.len() <= MAX_URI_LENGTH,
            RaffleError::ImageUriTooLong
        );
    }

    Ok(())
}

pub fn validate_ticket_price(price: u64) -> Result<()> {
    require!(
        (MIN_TICKET_PRICE..=MAX_TICKET_PRICE).contains(&price),
        RaffleError::InvalidTicketPrice
    );
    Ok(())
}

pub fn validate_total_tickets(total: u64) -> Result<()> {
    require!(
        (MIN_TOTAL_TICKETS..=MAX_TOTAL_TICKETS).contains(&total),
        RaffleError::InvalidTotalTickets
    );
    Ok(())
}

pub fn validate_commission_bps(bps: u16) -> Result<()> {
    require!(bps <= MAX_COMMISSION_BPS, RaffleError::InvalidCommissionRate);
    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<()> {
    require!(
        full_name.len() >= MIN_NAME_LENGTH && full_name.len() <= MAX_FULL_NAME_LENGTH,
        RaffleError::InvalidFullName
    );
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    require!(phone.len() <= MAX_PHONE_LENGTH, RaffleError::PhoneTooLong);
    Ok(())
}
