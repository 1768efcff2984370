//! Demo partners for local runs (`PCF_SEED_DEMO_DATA=true`).

use chrono::{TimeZone, Utc};
use promocode_factory_core::partners::{Partner, PartnerPromoCodeLimit};
use promocode_factory_core::repository::RepositoryTrait;
use promocode_factory_core::Result;
use uuid::{uuid, Uuid};

struct DemoPartner {
    id: Uuid,
    name: &'static str,
    is_active: bool,
    number_issued_promo_codes: i32,
    limit_id: Uuid,
    created: (i32, u32, u32),
    ends: (i32, u32, u32),
    limit: i32,
}

const DEMO_PARTNERS: [DemoPartner; 4] = [
    DemoPartner {
        id: uuid!("7d994823-8226-4273-b063-1a95f3cc1df8"),
        name: "Суперигрушки",
        is_active: true,
        number_issued_promo_codes: 100,
        limit_id: uuid!("e00633a5-978a-420e-a7d6-3e1dab116393"),
        created: (2020, 7, 9),
        ends: (2020, 10, 9),
        limit: 100,
    },
    DemoPartner {
        id: uuid!("894b6e9b-eb5f-406c-aefa-8ccb35d39319"),
        name: "Каждому кота",
        is_active: true,
        number_issued_promo_codes: 1000,
        limit_id: uuid!("c9bef066-3c5a-4e5d-9cff-bd54479f075e"),
        created: (2020, 5, 3),
        ends: (2020, 10, 15),
        limit: 1000,
    },
    DemoPartner {
        id: uuid!("0da65561-cf56-4942-bff2-22f50cf70d43"),
        name: "Рыба твоей мечты",
        is_active: false,
        number_issued_promo_codes: 10000,
        limit_id: uuid!("0e94624b-1ff9-430e-ba8d-ef1e3b77f2d5"),
        created: (2020, 10, 7),
        ends: (2021, 6, 9),
        limit: 10000,
    },
    DemoPartner {
        id: uuid!("88e0e5b5-1f2a-4c6b-9f3d-0a7b2c4d6e81"),
        name: "Хорошие игрушки",
        is_active: true,
        number_issued_promo_codes: 0,
        limit_id: uuid!("5a1f8c3e-7b2d-4e9a-b6c4-3d8e1f0a2b7c"),
        created: (2020, 8, 1),
        ends: (2020, 12, 31),
        limit: 500,
    },
];

fn to_partner(demo: &DemoPartner) -> Option<Partner> {
    let (cy, cm, cd) = demo.created;
    let (ey, em, ed) = demo.ends;
    let limit = PartnerPromoCodeLimit {
        id: demo.limit_id,
        partner_id: demo.id,
        create_date: Utc.with_ymd_and_hms(cy, cm, cd, 0, 0, 0).single()?,
        end_date: Utc.with_ymd_and_hms(ey, em, ed, 0, 0, 0).single()?,
        cancel_date: None,
        limit: demo.limit,
    };
    Some(Partner {
        id: demo.id,
        name: demo.name.to_string(),
        is_active: demo.is_active,
        number_issued_promo_codes: demo.number_issued_promo_codes,
        partner_limits: vec![limit],
    })
}

/// Inserts the demo partners when the store has no partners yet.
///
/// Returns the number of partners inserted.
pub async fn seed_demo_partners(repository: &dyn RepositoryTrait<Partner>) -> Result<usize> {
    if !repository.get_all().await?.is_empty() {
        tracing::debug!("Partners already present, skipping demo data");
        return Ok(0);
    }

    let mut inserted = 0;
    for partner in DEMO_PARTNERS.iter().filter_map(to_partner) {
        repository.add(partner).await?;
        inserted += 1;
    }
    tracing::info!("Seeded {} demo partners", inserted);
    Ok(inserted)
}
