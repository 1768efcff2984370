use log::{debug, info};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::partners_model::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest};
use super::partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing partners and their promo-code limits.
pub struct PartnerService {
    repository: Arc<PartnerRepositoryTrait>,
}

impl PartnerService {
    /// Creates a new PartnerService instance
    pub fn new(repository: Arc<PartnerRepositoryTrait>) -> Self {
        Self { repository }
    }

    async fn load_partner(&self, partner_id: Uuid) -> Result<Partner> {
        self.repository
            .get_by_id(partner_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Partner {} not found", partner_id)))
    }
}

#[async_trait]
impl PartnerServiceTrait for PartnerService {
    async fn get_partners(&self) -> Result<Vec<Partner>> {
        self.repository.get_all().await
    }

    async fn get_partner_limit(
        &self,
        partner_id: Uuid,
        limit_id: Uuid,
    ) -> Result<PartnerPromoCodeLimit> {
        let partner = self.load_partner(partner_id).await?;
        partner.find_limit(limit_id).cloned().ok_or_else(|| {
            Error::NotFound(format!(
                "Limit {} not found for partner {}",
                limit_id, partner_id
            ))
        })
    }

    async fn set_partner_promo_code_limit(
        &self,
        partner_id: Uuid,
        request: SetPartnerPromoCodeLimitRequest,
    ) -> Result<PartnerPromoCodeLimit> {
        debug!(
            "Setting promo code limit for partner {}: limit={}, end_date={}",
            partner_id, request.limit, request.end_date
        );

        let mut partner = self.load_partner(partner_id).await?;
        let new_limit =
            partner.set_promo_code_limit(request.limit, request.end_date, Utc::now())?;

        self.repository.update(partner).await?;

        info!(
            "Installed promo code limit {} ({}) for partner {}",
            new_limit.id, new_limit.limit, partner_id
        );
        Ok(new_limit)
    }

    async fn cancel_partner_promo_code_limit(&self, partner_id: Uuid) -> Result<()> {
        let mut partner = self.load_partner(partner_id).await?;
        partner.ensure_active()?;

        match partner.cancel_active_limit(Utc::now()) {
            Some(limit_id) => info!(
                "Cancelled promo code limit {} for partner {}",
                limit_id, partner_id
            ),
            None => debug!("Partner {} has no active limit to cancel", partner_id),
        }

        self.repository.update(partner).await?;
        Ok(())
    }
}
