// Client-side wiring tests: PDA derivations, instruction encoding, and the
// generated account metas for the full sales flow.

use anchor_lang::{AnchorDeserialize, AnchorSerialize, InstructionData, ToAccountMetas};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_program};

use raffle_platform::instructions::{CreateRaffleParams, RecordSaleParams};
use raffle_platform::state::{
    PaymentMethod, COMMITTEE_PRICING_SEED, PLATFORM_SEED, RAFFLE_SEED, SALE_SEED, STAFF_SEED,
};

fn platform_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_SEED], &raffle_platform::ID)
}

fn raffle_pda(raffle_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[RAFFLE_SEED, &raffle_id.to_le_bytes()],
        &raffle_platform::ID,
    )
}

fn staff_pda(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAFF_SEED, wallet.as_ref()], &raffle_platform::ID)
}

#[test]
fn pda_derivations_are_stable() {
    let (platform, _) = platform_pda();
    assert_eq!(platform, platform_pda().0);

    let (raffle_0, _) = raffle_pda(0);
    let (raffle_1, _) = raffle_pda(1);
    assert_ne!(raffle_0, raffle_1);

    let committee = Keypair::new().pubkey();
    let (pricing, _) = Pubkey::find_program_address(
        &[COMMITTEE_PRICING_SEED, raffle_0.as_ref(), committee.as_ref()],
        &raffle_platform::ID,
    );
    let (sale, _) = Pubkey::find_program_address(
        &[SALE_SEED, raffle_0.as_ref(), &0u64.to_le_bytes()],
        &raffle_platform::ID,
    );
    assert_ne!(pricing, sale);
}

#[test]
fn instruction_discriminators_are_distinct() {
    let init = raffle_platform::instruction::InitializePlatform {}.data();
    let cancel = raffle_platform::instruction::CancelSale {}.data();
    let remove = raffle_platform::instruction::RemoveSeller {}.data();

    assert!(init.len() >= 8);
    assert_ne!(init[..8], cancel[..8]);
    assert_ne!(init[..8], remove[..8]);
    assert_ne!(cancel[..8], remove[..8]);
}

#[test]
fn create_raffle_encoding_roundtrips() {
    let params = CreateRaffleParams {
        name: "iPhone 15 Pro Max".to_string(),
        description: "Flagship phone raffle".to_string(),
        image_uris: vec!["https://cdn.example.com/iphone.png".to_string()],
        draw_date: 1_900_000_000,
        ticket_price: 5_000,
        total_tickets: 1_000,
        commission_bps: 1_000,
        start_paused: false,
    };

    let data = raffle_platform::instruction::CreateRaffle {
        params: params.clone(),
    }
    .data();
    assert!(data.len() > 8);

    let bytes = params.try_to_vec().unwrap();
    let decoded = CreateRaffleParams::try_from_slice(&bytes).unwrap();
    assert_eq!(decoded.name, params.name);
    assert_eq!(decoded.ticket_price, params.ticket_price);
    assert_eq!(decoded.total_tickets, params.total_tickets);
    assert_eq!(decoded.commission_bps, params.commission_bps);
    assert_eq!(decoded.draw_date, params.draw_date);
}

#[test]
fn record_sale_params_roundtrip() {
    let params = RecordSaleParams {
        customer_name: "Maria Garcia".to_string(),
        customer_phone: "555-0134".to_string(),
        customer_email: "maria@example.com".to_string(),
        quantity: 5,
        payment_method: PaymentMethod::Cash,
        cash_received: 30_000,
        notes: String::new(),
    };

    let bytes = params.try_to_vec().unwrap();
    let decoded = RecordSaleParams::try_from_slice(&bytes).unwrap();
    assert_eq!(decoded.customer_name, params.customer_name);
    assert_eq!(decoded.quantity, 5);
    assert_eq!(decoded.payment_method, PaymentMethod::Cash);
    assert_eq!(decoded.cash_received, 30_000);
}

#[tokio::test]
async fn record_sale_metas_cover_the_full_flow() {
    let seller = Keypair::new();
    let (platform, _) = platform_pda();
    let (raffle, _) = raffle_pda(0);
    let (seller_staff, _) = staff_pda(&seller.pubkey());
    let (sale, _) = Pubkey::find_program_address(
        &[SALE_SEED, raffle.as_ref(), &0u64.to_le_bytes()],
        &raffle_platform::ID,
    );

    // Without an override the pricing slot is omitted.
    let metas = raffle_platform::accounts::RecordSale {
        platform,
        raffle,
        seller_staff,
        sale,
        seller: seller.pubkey(),
        system_program: system_program::id(),
        committee_pricing: None,
    }
    .to_account_metas(None);

    assert!(metas.iter().any(|m| m.pubkey == platform && m.is_writable));
    assert!(metas.iter().any(|m| m.pubkey == raffle && m.is_writable));
    assert!(metas.iter().any(|m| m.pubkey == sale && m.is_writable));
    assert!(metas
        .iter()
        .any(|m| m.pubkey == seller.pubkey() && m.is_signer));
}
