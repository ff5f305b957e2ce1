use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pawhaven_core::adoptions::{AdoptionService, AdoptionServiceTrait};
use pawhaven_core::campaigns::{CampaignService, CampaignServiceTrait};
use pawhaven_core::gateway::{PaymentGatewayTrait, StripeGateway};
use pawhaven_core::ledger::{LedgerService, LedgerServiceTrait};
use pawhaven_core::pets::{PetService, PetServiceTrait};
use pawhaven_core::users::{UserService, UserServiceTrait};
use pawhaven_storage_sqlite::adoptions::AdoptionRepository;
use pawhaven_storage_sqlite::campaigns::CampaignRepository;
use pawhaven_storage_sqlite::db;
use pawhaven_storage_sqlite::ledger::LedgerRepository;
use pawhaven_storage_sqlite::pets::PetRepository;
use pawhaven_storage_sqlite::users::UserRepository;

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub pet_service: Arc<dyn PetServiceTrait>,
    pub campaign_service: Arc<dyn CampaignServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub adoption_service: Arc<dyn AdoptionServiceTrait>,
    pub payment_gateway: Arc<dyn PaymentGatewayTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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
    let writer = db::spawn_writer(pool.clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repository));

    let pet_repository = Arc::new(PetRepository::new(pool.clone(), writer.clone()));
    let pet_service: Arc<dyn PetServiceTrait> =
        Arc::new(PetService::new(pet_repository, user_service.clone()));

    let campaign_repository = Arc::new(CampaignRepository::new(pool.clone(), writer.clone()));
    let campaign_service: Arc<dyn CampaignServiceTrait> = Arc::new(CampaignService::new(
        campaign_repository.clone(),
        user_service.clone(),
    ));

    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone(), writer.clone()));
    let ledger_service: Arc<dyn LedgerServiceTrait> = Arc::new(LedgerService::new(
        ledger_repository,
        campaign_repository,
        user_service.clone(),
    ));

    let adoption_repository = Arc::new(AdoptionRepository::new(pool.clone(), writer.clone()));
    let adoption_service: Arc<dyn AdoptionServiceTrait> = Arc::new(AdoptionService::new(
        adoption_repository,
        pet_service.clone(),
        user_service.clone(),
    ));

    let payment_gateway: Arc<dyn PaymentGatewayTrait> =
        Arc::new(StripeGateway::new(config.stripe_secret_key.clone()));

    let auth = Arc::new(AuthManager::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));

    Ok(Arc::new(AppState {
        user_service,
        pet_service,
        campaign_service,
        ledger_service,
        adoption_service,
        payment_gateway,
        auth,
    }))
}
