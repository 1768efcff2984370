use std::sync::Arc;

use crate::{config::Config, seed::seed_demo_partners};
use promocode_factory_core::partners::{PartnerService, PartnerServiceTrait};
use promocode_factory_storage_sqlite::{db, partners::PartnerRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub partner_service: Arc<dyn PartnerServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PCF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let partner_repository = Arc::new(PartnerRepository::new(pool, writer));
    if config.seed_demo_data {
        seed_demo_partners(partner_repository.as_ref()).await?;
    }

    let partner_service: Arc<dyn PartnerServiceTrait> =
        Arc::new(PartnerService::new(partner_repository));

    Ok(Arc::new(AppState { partner_service }))
}
