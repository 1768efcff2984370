//! SQLite storage implementation for partners.

mod model;
mod repository;


pub use model::{PartnerDB, PartnerPromoCodeLimitDB};
pub use repository::PartnerRepository;
