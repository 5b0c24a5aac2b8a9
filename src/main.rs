pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::verification;

mod config;

use crate::config::{AppConfig, StorageConfig};
use crate::shared::api::{custom_json_config, snapshot_payload_config};
use crate::verification::adapter::outgoing::{
    FileKeyValueStorage, HtmlCertificateRenderer, LocalRecordStore, MemoryKeyValueStorage,
    MemoryLabelCatalog, PrintDocumentExporter, RandomUniqueIdGenerator, RemoteRecordStore,
};
use crate::verification::application::ports::outgoing::{CertificateRenderer, RecordStore};
use crate::verification::application::verification_use_cases::VerificationUseCases;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub verification: VerificationUseCases,
    pub certificate_renderer: Arc<dyn CertificateRenderer>,
    pub record_store: Arc<dyn RecordStore>,
    /// Prefix of the links printed on certificates, without a trailing slash
    pub public_base_url: String,
}

#[cfg(not(tarpaulin_include))]
fn build_record_store(storage: &StorageConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    let id_generator = Arc::new(RandomUniqueIdGenerator);

    let store: Arc<dyn RecordStore> = match storage {
        StorageConfig::Local { dir } => {
            let storage = FileKeyValueStorage::new(dir);
            info!("Using local record store under {}", storage.root().display());
            Arc::new(LocalRecordStore::new(storage, id_generator))
        }
        StorageConfig::Memory => {
            info!("Using in-memory record store; records are lost on restart");
            Arc::new(LocalRecordStore::new(MemoryKeyValueStorage::new(), id_generator))
        }
        StorageConfig::Remote { base_url, timeout } => {
            let store = RemoteRecordStore::new(base_url, *timeout)?;
            info!("Using remote record store at {}", store.base_url());
            Arc::new(store)
        }
    };

    Ok(store)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let record_store = build_record_store(&config.storage)?;

    let certificate_renderer: Arc<dyn CertificateRenderer> = Arc::new(HtmlCertificateRenderer);
    let verification = VerificationUseCases::new(
        record_store.clone(),
        Arc::new(MemoryLabelCatalog::new()),
        Arc::new(PrintDocumentExporter::new(certificate_renderer.clone())),
        config.display_offset,
    );

    let state = AppState {
        verification,
        certificate_renderer,
        record_store,
        public_base_url: config.public_base_url.clone(),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);
    info!("Public certificate links use {}", config.public_base_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(snapshot_payload_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::verification::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin
    cfg.service(routes::get_records_handler);
    cfg.service(routes::create_record_handler);
    cfg.service(routes::get_record_handler);
    cfg.service(routes::patch_record_handler);
    cfg.service(routes::delete_record_handler);
    cfg.service(routes::preview_certificate_handler);
    cfg.service(routes::export_certificate_handler);
    cfg.service(routes::export_snapshot_handler);
    cfg.service(routes::import_snapshot_handler);
    cfg.service(routes::get_labels_handler);
    cfg.service(routes::add_label_handler);
    // Public
    cfg.service(routes::public_certificate_page_handler);
    cfg.service(routes::get_public_certificate_handler);
    // Collection resource for remote backends
    cfg.service(routes::get_verified_users_handler);
    cfg.service(routes::create_verified_user_handler);
    cfg.service(routes::delete_verified_user_handler);
    cfg.service(routes::verified_users_preflight_handler);
    cfg.service(routes::verified_users_method_not_allowed_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
