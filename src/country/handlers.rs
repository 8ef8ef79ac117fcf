use actix_web::{web, HttpResponse, Responder};

use crate::country::model::Country;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "Countries",
    responses(
        (status = 200, description = "All countries; empty when the upstream API is unavailable", body = Vec<Country>)
    )
)]
pub async fn get_countries(state: web::Data<AppState>) -> impl Responder {
    let countries = state.countries.get_countries().await;
    HttpResponse::Ok().json(countries)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/countries").route(web::get().to(get_countries)));
}
