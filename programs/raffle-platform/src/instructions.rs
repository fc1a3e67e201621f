pub mod cancel_sale;
pub mod committee_pricing;
pub mod complete_raffle;
pub mod create_raffle;
pub mod initialize_platform;
pub mod manage_seller;
pub mod record_sale;
pub mod register_committee;
pub mod register_seller;
pub mod update_raffle;

pub use cancel_sale::*;
pub use committee_pricing::*;
pub use complete_raffle::*;
pub use create_raffle::*;
pub use initialize_platform::*;
pub use manage_seller::*;
pub use record_sale::*;
pub use register_committee::*;
pub use register_seller::*;
pub use update_raffle::*;
