use actix_web::{App, HttpServer, middleware::Compress, web};
use std::sync::Arc;
use tracing::info;

use aliasmap::api::services::{AppStartTime, health_routes, redirect_routes, url_api_routes};
use aliasmap::config::init_config;
use aliasmap::services::RegistryService;
use aliasmap::storage::StorageFactory;
use aliasmap::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();
    let config = init_config();

    // Guard must live until shutdown so buffered log lines are flushed
    let _log_guard = init_logging(&config);

    let storage = StorageFactory::create()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Using storage backend: {}", storage.backend_name());

    let registry = Arc::new(RegistryService::new(
        storage.clone(),
        config.features.alias_length,
    ));

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(Compress::default())
            .service(health_routes())
            .service(url_api_routes())
            // 重定向路由必须最后注册（通配路径）
            .service(redirect_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
