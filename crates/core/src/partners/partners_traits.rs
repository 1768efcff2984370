//! Partner service trait.
//!
//! Persistence goes through the generic [`RepositoryTrait`] so the service
//! never sees database-specific types.

use async_trait::async_trait;
use uuid::Uuid;

use super::partners_model::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest};
use crate::errors::Result;
use crate::repository::RepositoryTrait;

/// Repository for the partner aggregate, limits included.
pub type PartnerRepositoryTrait = dyn RepositoryTrait<Partner>;

/// Trait defining the contract for partner service operations.
#[async_trait]
pub trait PartnerServiceTrait: Send + Sync {
    /// Lists all partners with their limit history.
    async fn get_partners(&self) -> Result<Vec<Partner>>;

    /// Retrieves one limit of a partner.
    async fn get_partner_limit(
        &self,
        partner_id: Uuid,
        limit_id: Uuid,
    ) -> Result<PartnerPromoCodeLimit>;

    /// Replaces the active limit of a partner with a new one.
    ///
    /// Returns the newly installed limit.
    async fn set_partner_promo_code_limit(
        &self,
        partner_id: Uuid,
        request: SetPartnerPromoCodeLimitRequest,
    ) -> Result<PartnerPromoCodeLimit>;

    /// Cancels the active limit of a partner without installing a new one.
    async fn cancel_partner_promo_code_limit(&self, partner_id: Uuid) -> Result<()>;
}
