//! Partners module - domain models, services, and traits.

mod partners_model;
mod partners_service;
mod partners_traits;

#[cfg(test)]
mod partners_model_tests;

pub use partners_model::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest};
pub use partners_service::PartnerService;
pub use partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
