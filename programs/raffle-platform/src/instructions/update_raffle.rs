use anchor_lang::prelude::*;

use crate::{
    errors::*,
    events::{RaffleStatusChanged, RaffleUpdated},
    state::*,
    utils,
};

pub fn update_raffle(
    ctx: Context<UpdateRaffle>,
    new_name: Option<String>,
    new_description: Option<String>,
    new_image_uris: Option<Vec<String>>,
    new_draw_date: Option<i64>,
    new_ticket_price: Option<u64>,
    new_commission_bps: Option<u16>,
) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let now = Clock::get()?.unix_timestamp;

    require!(
        raffle.status != RaffleStatus::Completed,
        RaffleError::RaffleCompleted
    );

    let changed = apply_raffle_update(
        raffle,
        new_name,
        new_description,
        new_image_uris,
        new_draw_date,
        new_ticket_price,
        new_commission_bps,
        now,
    )?;

    // A call with nothing to change leaves the account and the log alone.
    if !changed {
        return Ok(());
    }

    raffle.updated_at = now;

    emit!(RaffleUpdated {
        raffle: raffle.key(),
        ticket_price: raffle.ticket_price,
        commission_bps: raffle.commission_bps,
        draw_date: raffle.draw_date,
    });

    msg!("Raffle {} updated", raffle.raffle_id);

    Ok(())
}

/// Applies the supplied field edits to the raffle. Returns whether any
/// field was actually set.
#[allow(clippy::too_many_arguments)]
fn apply_raffle_update(
    raffle: &mut Raffle,
    new_name: Option<String>,
    new_description: Option<String>,
    new_image_uris: Option<Vec<String>>,
    new_draw_date: Option<i64>,
    new_ticket_price: Option<u64>,
    new_commission_bps: Option<u16>,
    now: i64,
) -> Result<bool> {
    let mut changed = false;

    if let Some(name) = new_name {
        utils::validate_raffle_name(&name)?;
        raffle.name = name;
        changed = true;
    }

    if let Some(description) = new_description {
        utils::validate_description(&description)?;
        raffle.description = description;
        changed = true;
    }

    if let Some(image_uris) = new_image_uris {
        utils::validate_image_uris(&image_uris)?;
        raffle.image_uris = image_uris;
        changed = true;
    }

    if let Some(draw_date) = new_draw_date {
        require!(draw_date > now, RaffleError::DrawDateInPast);
        raffle.draw_date = draw_date;
        changed = true;
    }

    if let Some(ticket_price) = new_ticket_price {
        utils::validate_ticket_price(ticket_price)?;
        raffle.ticket_price = ticket_price;
        changed = true;
    }

    if let Some(commission_bps) = new_commission_bps {
        utils::validate_commission_bps(commission_bps)?;
        raffle.commission_bps = commission_bps;
        changed = true;
    }

    Ok(changed)
}

pub fn set_raffle_status(ctx: Context<UpdateRaffle>, new_status: RaffleStatus) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;

    require!(
        raffle.status != RaffleStatus::Completed,
        RaffleError::RaffleCompleted
    );
    // Completion goes through complete_raffle so the winner gets recorded.
    require!(
        new_status != RaffleStatus::Completed,
        RaffleError::InvalidStatusTransition
    );

    raffle.status = new_status;
    raffle.updated_at = Clock::get()?.unix_timestamp;

    emit!(RaffleStatusChanged {
        raffle: raffle.key(),
        status: new_status as u8,
    });

    msg!("Raffle {} status changed to {:?}", raffle.raffle_id, new_status);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRaffle<'info> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn raffle() -> Raffle {
        Raffle {
            raffle_id: 3,
            raffle_code: [0u8; 32],
            created_by: Pubkey::new_unique(),
            name: "MacBook Air".to_string(),
            description: "13 inch, M3".to_string(),
            image_uris: vec!["https://cdn.example.org/air.png".to_string()],
            draw_date: 1_900_000_000,
            ticket_price: 2_500,
            total_tickets: 500,
            sold_tickets: 40,
            commission_bps: 1_000,
            status: RaffleStatus::Active,
            sales_count: 12,
            gross_revenue: 100_000,
            commission_accrued: 10_000,
            winning_ticket: None,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
            bump: 255,
        }
    }

    #[test]
    fn all_none_leaves_the_raffle_untouched() {
        let mut raffle = raffle();

        let changed =
            apply_raffle_update(&mut raffle, None, None, None, None, None, None, 1_800_000_000)
                .unwrap();

        assert!(!changed);
        assert_eq!(raffle.name, "MacBook Air");
        assert_eq!(raffle.draw_date, 1_900_000_000);
        assert_eq!(raffle.ticket_price, 2_500);
        assert_eq!(raffle.commission_bps, 1_000);
        assert_eq!(raffle.updated_at, 1_700_000_000);
    }

    #[test]
    fn a_single_field_counts_as_a_change() {
        let mut raffle = raffle();

        let changed = apply_raffle_update(
            &mut raffle,
            None,
            None,
            None,
            None,
            Some(3_000),
            None,
            1_800_000_000,
        )
        .unwrap();

        assert!(changed);
        assert_eq!(raffle.ticket_price, 3_000);
        assert_eq!(raffle.name, "MacBook Air");
    }

    #[test]
    fn invalid_edits_are_rejected() {
        let mut raffle = raffle();
        let now = 1_800_000_000;

        assert!(apply_raffle_update(
            &mut raffle,
            Some("ab".to_string()),
            None,
            None,
            None,
            None,
            None,
            now
        )
        .is_err());
        // A draw date that is not in the future.
        assert!(
            apply_raffle_update(&mut raffle, None, None, None, Some(now), None, None, now).is_err()
        );
        assert!(apply_raffle_update(&mut raffle, None, None, None, None, Some(0), None, now).is_err());
    }
}
