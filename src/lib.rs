use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod country;
pub mod db;
pub mod export;
pub mod metrics;
pub mod pages;
pub mod product;
pub mod report;

pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::product::handlers::get_active_products,
        crate::country::handlers::get_countries,
        crate::export::handlers::export_products,
        crate::export::handlers::export_countries,
        crate::export::handlers::export_test_pdf,
        crate::pages::error_page,
    ),
    components(
        schemas(
            product::model::Product,
            country::model::Country,
            country::model::Continent,
            pages::ErrorPage,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints."),
        (name = "Countries", description = "Country directory endpoints."),
        (name = "Export", description = "PDF report exports."),
        (name = "Pages", description = "Front-end support endpoints.")
    )
)]
pub struct ApiDoc;

/// Register every route on an app; shared by `run` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(product::handlers::config)
            .configure(country::handlers::config),
    )
    .configure(export::handlers::config)
    .route("/metrics/exports", web::get().to(metrics::export_metrics))
    .configure(pages::config);
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new_with_config(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to initialize application state. Please check DATABASE_URL and GRAPHQL_ENDPOINT in .env. Error: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("catalog_export_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
