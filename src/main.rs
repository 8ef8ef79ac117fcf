#[actix_web::main]
async fn main() -> std::io::Result<()> {
    catalog_export_server::run().await
}
