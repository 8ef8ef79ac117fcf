use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use super::{ExportError, ReportKind};
use crate::metrics::record_export;
use crate::product::Product;
use crate::report::{DocumentRenderer, Record, RenderedDocument};
use crate::AppState;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const TEST_EXPORT_FILENAME: &str = "test-export.pdf";

#[utoipa::path(
    get,
    path = "/products/export",
    tag = "Export",
    responses(
        (status = 200, description = "Products report as application/pdf attachment"),
        (status = 302, description = "Export failed; redirect to /products")
    )
)]
pub async fn export_products(state: web::Data<AppState>) -> impl Responder {
    respond(ReportKind::Products, load_and_render_products(&state).await)
}

async fn load_and_render_products(state: &AppState) -> Result<RenderedDocument, ExportError> {
    let products = state.products.active_products().await?;
    render_blocking(state.renderer.clone(), products, ReportKind::Products.title()).await
}

#[utoipa::path(
    get,
    path = "/countries/export",
    tag = "Export",
    responses(
        (status = 200, description = "Countries report as application/pdf attachment"),
        (status = 302, description = "Export failed; redirect to /countries")
    )
)]
pub async fn export_countries(state: web::Data<AppState>) -> impl Responder {
    let countries = state.countries.get_countries().await;
    let result = render_blocking(state.renderer.clone(), countries, ReportKind::Countries.title()).await;

    respond(ReportKind::Countries, result)
}

/// Renders a single sample product to check the PDF pipeline end to end.
#[utoipa::path(
    get,
    path = "/products/export/test",
    tag = "Export",
    responses(
        (status = 200, description = "Sample products report, or a plain-text failure message")
    )
)]
pub async fn export_test_pdf(state: web::Data<AppState>) -> impl Responder {
    let sample = vec![Product {
        id: 1,
        name: "Test Product".to_string(),
        category: "Test".to_string(),
        price_cents: 9999,
        created_date: Local::now().naive_local(),
        is_active: true,
    }];

    match render_blocking(state.renderer.clone(), sample, ReportKind::Products.title()).await {
        Ok(document) => pdf_response(document, TEST_EXPORT_FILENAME),
        Err(e) => {
            log::error!("Error generating test PDF: {}", e);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format!("PDF Test Failed: {}", e))
        }
    }
}

/// Render on the blocking pool so large reports do not stall the async workers.
async fn render_blocking<R>(
    renderer: DocumentRenderer,
    records: Vec<R>,
    title: &'static str,
) -> Result<RenderedDocument, ExportError>
where
    R: Record + Send + 'static,
{
    let document = web::block(move || renderer.render(&records, &R::document_spec(), title))
        .await
        .map_err(|_| ExportError::Cancelled)??;
    Ok(document)
}

fn respond(kind: ReportKind, result: Result<RenderedDocument, ExportError>) -> HttpResponse {
    match result {
        Ok(document) => {
            record_export(kind.label(), true);
            pdf_response(document, kind.filename())
        }
        Err(e) => {
            log::error!("Error generating {} PDF: {}", kind.label(), e);
            record_export(kind.label(), false);
            HttpResponse::Found()
                .insert_header((header::LOCATION, kind.listing_path()))
                .finish()
        }
    }
}

fn pdf_response(document: RenderedDocument, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(PDF_CONTENT_TYPE)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.to_string())],
        })
        .body(document.into_bytes())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/products/export").route(web::get().to(export_products)))
        .service(web::resource("/products/export/test").route(web::get().to(export_test_pdf)))
        .service(web::resource("/countries/export").route(web::get().to(export_countries)));
}
