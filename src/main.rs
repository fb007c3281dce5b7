use catalog_service::{build_repository, build_server, Settings};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().expect("Invalid configuration");

    let repo = build_repository(&settings)
        .await
        .expect("Failed to connect to the item store");

    log::info!(
        "Starting server at http://{}:{} ({:?} repository)",
        settings.host,
        settings.port,
        settings.repository
    );

    build_server(repo, &settings.host, settings.port)?.await
}
