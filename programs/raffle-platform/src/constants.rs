pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_IMAGES_COUNT: usize = 5;
pub const MAX_FULL_NAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_NOTES_LENGTH: usize = 200;

/// Ticket prices are denominated in minor currency units (cents).
pub const MIN_TICKET_PRICE: u64 = 1;
pub const MAX_TICKET_PRICE: u64 = 1_000_000; // 10,000.00

pub const MIN_TOTAL_TICKETS: u64 = 10;
pub const MAX_TOTAL_TICKETS: u64 = 1_000_000;

/// Commission rates are expressed in basis points, capped at 50%.
pub const MAX_COMMISSION_BPS: u16 = 5_000;
pub const BPS_DENOMINATOR: u64 = 10_000;
