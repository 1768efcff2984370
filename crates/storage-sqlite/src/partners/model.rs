//! Database models for partners and their promo-code limits.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use promocode_factory_core::partners::{Partner, PartnerPromoCodeLimit};

use crate::errors::StorageError;

/// Database model for partners
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::partners)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PartnerDB {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub number_issued_promo_codes: i32,
}

/// Database model for partner promo-code limits
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Debug,
    Clone,
)]
#[diesel(belongs_to(PartnerDB, foreign_key = partner_id))]
#[diesel(table_name = crate::schema::partner_promo_code_limits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PartnerPromoCodeLimitDB {
    pub id: String,
    pub partner_id: String,
    pub position: i32,
    pub create_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub cancel_date: Option<NaiveDateTime>,
    pub promo_code_limit: i32,
}

fn parse_id(value: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(value).map_err(|e| StorageError::CorruptRow(format!("{}: {}", value, e)))
}

impl PartnerPromoCodeLimitDB {
    pub fn from_domain(limit: &PartnerPromoCodeLimit, position: usize) -> Self {
        Self {
            id: limit.id.to_string(),
            partner_id: limit.partner_id.to_string(),
            position: position as i32,
            create_date: limit.create_date.naive_utc(),
            end_date: limit.end_date.naive_utc(),
            cancel_date: limit.cancel_date.map(|d| d.naive_utc()),
            promo_code_limit: limit.limit,
        }
    }

    pub fn into_domain(self) -> Result<PartnerPromoCodeLimit, StorageError> {
        Ok(PartnerPromoCodeLimit {
            id: parse_id(&self.id)?,
            partner_id: parse_id(&self.partner_id)?,
            create_date: self.create_date.and_utc(),
            end_date: self.end_date.and_utc(),
            cancel_date: self.cancel_date.map(|d| d.and_utc()),
            limit: self.promo_code_limit,
        })
    }
}

impl From<&Partner> for PartnerDB {
    fn from(domain: &Partner) -> Self {
        Self {
            id: domain.id.to_string(),
            name: domain.name.clone(),
            is_active: domain.is_active,
            number_issued_promo_codes: domain.number_issued_promo_codes,
        }
    }
}

impl PartnerDB {
    /// Builds the domain aggregate from a partner row and its limit rows.
    ///
    /// `limits` must already be in position order.
    pub fn into_domain(
        self,
        limits: Vec<PartnerPromoCodeLimitDB>,
    ) -> Result<Partner, StorageError> {
        Ok(Partner {
            id: parse_id(&self.id)?,
            name: self.name,
            is_active: self.is_active,
            number_issued_promo_codes: self.number_issued_promo_codes,
            partner_limits: limits
                .into_iter()
                .map(PartnerPromoCodeLimitDB::into_domain)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
