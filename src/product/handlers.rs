use actix_web::{web, HttpResponse, Responder};

use crate::product::model::Product;
use crate::{AppState, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Active products ordered by name", body = Vec<Product>),
        (status = 500, description = "Product store unavailable", body = ErrorResponse)
    )
)]
pub async fn get_active_products(state: web::Data<AppState>) -> impl Responder {
    match state.products.active_products().await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            log::error!("Error loading products: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to load products"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/products").route(web::get().to(get_active_products)));
}
