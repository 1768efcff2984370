//! Partner domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// A partner entitled to issue promo codes under a time-boxed limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub number_issued_promo_codes: i32,
    /// Limit history in insertion order. At most one entry has no cancel date.
    pub partner_limits: Vec<PartnerPromoCodeLimit>,
}

/// One issuance limit period of a partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPromoCodeLimit {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub create_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub cancel_date: Option<DateTime<Utc>>,
    pub limit: i32,
}

/// Input model for installing a new limit on a partner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPartnerPromoCodeLimitRequest {
    pub end_date: DateTime<Utc>,
    pub limit: i32,
}

impl PartnerPromoCodeLimit {
    pub fn new(
        partner_id: Uuid,
        limit: i32,
        create_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            partner_id,
            create_date,
            end_date,
            cancel_date: None,
            limit,
        }
    }

    /// A limit is active until it gets a cancel date.
    pub fn is_active(&self) -> bool {
        self.cancel_date.is_none()
    }
}

impl Partner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_active: true,
            number_issued_promo_codes: 0,
            partner_limits: Vec::new(),
        }
    }

    /// Returns the limit without a cancel date, if any.
    pub fn active_limit(&self) -> Option<&PartnerPromoCodeLimit> {
        self.partner_limits.iter().find(|l| l.is_active())
    }

    pub fn find_limit(&self, limit_id: Uuid) -> Option<&PartnerPromoCodeLimit> {
        self.partner_limits.iter().find(|l| l.id == limit_id)
    }

    /// Fails with `InvalidOperation` when the partner is blocked.
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_active {
            Ok(())
        } else {
            Err(Error::InvalidOperation(format!(
                "Partner {} is not active",
                self.id
            )))
        }
    }

    /// Stamps `now` as the cancel date of the active limit.
    ///
    /// Returns the ID of the cancelled limit, or `None` when there was nothing
    /// to cancel.
    pub fn cancel_active_limit(&mut self, now: DateTime<Utc>) -> Option<Uuid> {
        self.partner_limits
            .iter_mut()
            .find(|l| l.is_active())
            .map(|l| {
                l.cancel_date = Some(now);
                l.id
            })
    }

    /// Installs a new limit period on this partner.
    ///
    /// The previous active limit is cancelled and the issued counter is reset
    /// before the new value is checked, so a rejected non-positive limit still
    /// leaves those two changes on this instance. Callers must not persist the
    /// partner when this returns an error.
    pub fn set_promo_code_limit(
        &mut self,
        limit: i32,
        end_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<PartnerPromoCodeLimit> {
        self.ensure_active()?;

        self.cancel_active_limit(now);
        self.number_issued_promo_codes = 0;

        if limit <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Limit must be greater than 0".to_string(),
            )));
        }

        let new_limit = PartnerPromoCodeLimit::new(self.id, limit, now, end_date);
        self.partner_limits.push(new_limit.clone());
        Ok(new_limit)
    }
}
