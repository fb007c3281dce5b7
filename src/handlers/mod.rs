pub mod dto;
pub mod health;
pub mod items;

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;

/// Registers the item and health routes on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/items")
                .route("", web::get().to(items::list_items))
                .route("", web::post().to(items::create_item))
                .route("/{id}", web::get().to(items::get_item))
                .route("/{id}", web::put().to(items::update_item))
                .route("/{id}", web::delete().to(items::delete_item)),
        )
        .service(
            web::scope("/health")
                .route("/live", web::get().to(health::live))
                .route("/ready", web::get().to(health::ready)),
        );
}

/// Malformed or incomplete JSON bodies become 400s in the same error shape
/// as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}
