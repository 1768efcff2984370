use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use promocode_factory_core::errors::{DatabaseError, Error};
use promocode_factory_core::partners::Partner;
use promocode_factory_core::repository::RepositoryTrait;
use promocode_factory_core::Result;

use super::model::{PartnerDB, PartnerPromoCodeLimitDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{partner_promo_code_limits, partners};

/// SQLite-backed repository for the partner aggregate.
///
/// Reads go through the connection pool; writes are serialized through the
/// writer actor and run in one transaction per call.
pub struct PartnerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PartnerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PartnerRepository { pool, writer }
    }

    fn load_partners(
        conn: &mut SqliteConnection,
        partner_id: Option<&str>,
    ) -> Result<Vec<Partner>> {
        let mut query = partners::table
            .select(PartnerDB::as_select())
            .order(partners::name.asc())
            .into_boxed();
        if let Some(pid) = partner_id {
            query = query.filter(partners::id.eq(pid.to_string()));
        }
        let partners_db = query.load::<PartnerDB>(conn).into_core()?;

        let limits_db = PartnerPromoCodeLimitDB::belonging_to(&partners_db)
            .select(PartnerPromoCodeLimitDB::as_select())
            .order(partner_promo_code_limits::position.asc())
            .load::<PartnerPromoCodeLimitDB>(conn)
            .into_core()?;

        let grouped = limits_db.grouped_by(&partners_db);
        partners_db
            .into_iter()
            .zip(grouped)
            .map(|(partner, limits)| partner.into_domain(limits).map_err(Error::from))
            .collect()
    }

    /// Writes every limit of the aggregate, inserting new rows and updating
    /// existing ones. Limits are never deleted.
    fn upsert_limits(conn: &mut SqliteConnection, partner: &Partner) -> Result<usize> {
        let mut affected = 0;
        for (position, limit) in partner.partner_limits.iter().enumerate() {
            let limit_db = PartnerPromoCodeLimitDB::from_domain(limit, position);
            affected += diesel::insert_into(partner_promo_code_limits::table)
                .values(&limit_db)
                .on_conflict(partner_promo_code_limits::id)
                .do_update()
                .set(&limit_db)
                .execute(conn)
                .map_err(StorageError::from)?;
        }
        Ok(affected)
    }
}

#[async_trait]
impl RepositoryTrait<Partner> for PartnerRepository {
    async fn get_all(&self) -> Result<Vec<Partner>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_partners(&mut conn, None)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Partner>> {
        let mut conn = get_connection(&self.pool)?;
        let mut found = Self::load_partners(&mut conn, Some(id.to_string().as_str()))?;
        Ok(found.pop())
    }

    async fn add(&self, entity: Partner) -> Result<Partner> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Partner> {
                diesel::insert_into(partners::table)
                    .values(PartnerDB::from(&entity))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Self::upsert_limits(conn, &entity)?;
                debug!("Inserted partner {}", entity.id);
                Ok(entity)
            })
            .await
    }

    async fn update(&self, entity: Partner) -> Result<Partner> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Partner> {
                let partner_db = PartnerDB::from(&entity);
                let updated = diesel::update(partners::table.find(&partner_db.id))
                    .set(&partner_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Partner {} does not exist",
                        entity.id
                    ))));
                }
                let limits = Self::upsert_limits(conn, &entity)?;
                debug!("Updated partner {} ({} limit rows)", entity.id, limits);
                Ok(entity)
            })
            .await
    }
}
