//! HTML front-end: static pages plus the error payload.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Get the static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

fn page_path(name: &str) -> PathBuf {
    get_static_dir().join(name)
}

async fn page(name: &str) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(page_path(name)).await?)
}

pub async fn index() -> actix_web::Result<NamedFile> {
    page("index.html").await
}

pub async fn privacy() -> actix_web::Result<NamedFile> {
    page("privacy.html").await
}

pub async fn products() -> actix_web::Result<NamedFile> {
    page("products.html").await
}

pub async fn countries() -> actix_web::Result<NamedFile> {
    page("countries.html").await
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorPage {
    pub request_id: String,
}

#[utoipa::path(
    get,
    path = "/error",
    tag = "Pages",
    responses(
        (status = 200, description = "Error details with the request id", body = ErrorPage)
    )
)]
pub async fn error_page(req: HttpRequest) -> impl Responder {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache"))
        .json(ErrorPage { request_id })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/privacy", web::get().to(privacy))
        .route("/products", web::get().to(products))
        .route("/countries", web::get().to(countries))
        .route("/error", web::get().to(error_page))
        .service(Files::new("/static", get_static_dir()));
}
