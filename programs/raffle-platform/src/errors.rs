use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Invalid platform authority")]
    InvalidAuthority,

    #[msg("Raffle name must be between 3 and 100 characters")]
    InvalidRaffleName,

    #[msg("Description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("At least one image URI is required")]
    MissingImages,

    #[msg("Too many image URIs")]
    TooManyImages,

    #[msg("Image URI exceeds the maximum length")]
    ImageUriTooLong,

    #[msg("Draw date must be in the future")]
    DrawDateInPast,

    #[msg("Ticket price must be between 0.01 and 10,000.00")]
    InvalidTicketPrice,

    #[msg("Total tickets must be between 10 and 1,000,000")]
    InvalidTotalTickets,

    #[msg("Commission rate must be between 0% and 50%")]
    InvalidCommissionRate,

    #[msg("Raffle is not active")]
    RaffleNotActive,

    #[msg("Raffle is already completed")]
    RaffleCompleted,

    #[msg("Draw date has already passed")]
    DrawDatePassed,

    #[msg("Draw date has not been reached yet")]
    DrawDateNotReached,

    #[msg("Winning ticket is outside the sold range")]
    InvalidWinningTicket,

    #[msg("Completed raffles cannot change status")]
    InvalidStatusTransition,

    #[msg("Not enough tickets remaining")]
    InsufficientTickets,

    #[msg("Quantity must be greater than zero")]
    InvalidQuantity,

    #[msg("Customer name is required")]
    MissingCustomerName,

    #[msg("Customer phone is required")]
    MissingCustomerPhone,

    #[msg("Customer field exceeds the maximum length")]
    CustomerFieldTooLong,

    #[msg("Notes exceed the maximum length")]
    NotesTooLong,

    #[msg("Cash received is less than the sale total")]
    InsufficientCash,

    #[msg("Staff account does not belong to a committee")]
    NotACommittee,

    #[msg("Staff account does not belong to a seller")]
    NotASeller,

    #[msg("Staff account is suspended")]
    StaffSuspended,

    #[msg("Seller is not supervised by this committee")]
    SupervisorMismatch,

    #[msg("Seller with recorded sales cannot be removed")]
    SellerHasSales,

    #[msg("Full name must be between 3 and 100 characters")]
    InvalidFullName,

    #[msg("Phone exceeds the maximum length")]
    PhoneTooLong,

    #[msg("Committee pricing does not belong to this raffle")]
    PricingRaffleMismatch,

    #[msg("Committee pricing is not active")]
    PricingInactive,

    #[msg("Sale does not belong to this raffle")]
    SaleRaffleMismatch,

    #[msg("Sale has already been cancelled")]
    SaleAlreadyCancelled,

    #[msg("Staff account does not match the sale's seller")]
    SellerMismatch,

    #[msg("Mathematical overflow occurred")]
    MathematicalOverflow,
}
