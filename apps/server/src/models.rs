use chrono::{DateTime, Utc};
use promocode_factory_core::partners as core_partners;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub number_issued_promo_codes: i32,
    pub partner_limits: Vec<PartnerPromoCodeLimit>,
}

impl From<core_partners::Partner> for Partner {
    fn from(p: core_partners::Partner) -> Self {
        Self {
            id: p.id,
            name: p.name,
            is_active: p.is_active,
            number_issued_promo_codes: p.number_issued_promo_codes,
            partner_limits: p
                .partner_limits
                .into_iter()
                .map(PartnerPromoCodeLimit::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPromoCodeLimit {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub create_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub cancel_date: Option<DateTime<Utc>>,
    pub limit: i32,
}

impl From<core_partners::PartnerPromoCodeLimit> for PartnerPromoCodeLimit {
    fn from(l: core_partners::PartnerPromoCodeLimit) -> Self {
        Self {
            id: l.id,
            partner_id: l.partner_id,
            create_date: l.create_date,
            end_date: l.end_date,
            cancel_date: l.cancel_date,
            limit: l.limit,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetPartnerPromoCodeLimitRequest {
    pub end_date: DateTime<Utc>,
    pub limit: i32,
}

impl From<SetPartnerPromoCodeLimitRequest> for core_partners::SetPartnerPromoCodeLimitRequest {
    fn from(r: SetPartnerPromoCodeLimitRequest) -> Self {
        Self {
            end_date: r.end_date,
            limit: r.limit,
        }
    }
}
