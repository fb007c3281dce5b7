pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::{RepositoryKind, Settings};
pub use db::{client_options, create_blocking_client, create_client};
pub use domain::errors::DomainError;
pub use domain::ports::{AsyncItemRepository, ItemRepository};
pub use infrastructure::{BlockingAdapter, BlockingMongoItemRepository, MongoItemRepository};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::items::list_items,
        handlers::items::get_item,
        handlers::items::create_item,
        handlers::items::update_item,
        handlers::items::delete_item,
        handlers::health::live,
        handlers::health::ready,
    ),
    components(schemas(
        handlers::dto::CreateItemDto,
        handlers::dto::UpdateItemDto,
        handlers::dto::ReadItemDto,
        errors::FieldError,
    )),
    tags(
        (name = "items", description = "Catalog items"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Connects the repository implementation selected in `settings`.
pub async fn build_repository(
    settings: &Settings,
) -> Result<Arc<dyn AsyncItemRepository>, DomainError> {
    let options = client_options(&settings.mongo).await?;
    match settings.repository {
        RepositoryKind::Async => {
            let client = create_client(options)?;
            Ok(Arc::new(MongoItemRepository::new(client)))
        }
        RepositoryKind::Blocking => {
            // The blocking driver drives its own runtime and must be built
            // off the async executor.
            let client = web::block(move || create_blocking_client(options))
                .await
                .map_err(|e| DomainError::Internal(e.to_string()))??;
            Ok(Arc::new(BlockingAdapter::new(
                BlockingMongoItemRepository::new(client),
            )))
        }
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    repo: Arc<dyn AsyncItemRepository>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let repo = web::Data::from(repo);
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(repo.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn read_item_price_is_documented_as_string() {
        let doc: Value =
            serde_json::from_str(&ApiDoc::openapi().to_json().expect("serializable")).unwrap();
        let price = &doc["components"]["schemas"]["ReadItemDto"]["properties"]["price"];

        assert_eq!(price["type"], "string");
        assert!(price["description"]
            .as_str()
            .expect("price description")
            .contains("JSON string"));
    }

    #[test]
    fn every_item_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/items", "/items/{id}", "/health/live", "/health/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
