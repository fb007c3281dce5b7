use mongodb::options::ClientOptions;
use mongodb::{sync, Client, Collection};

use crate::config::MongoSettings;
use crate::infrastructure::models::ItemDocument;

pub const DATABASE_NAME: &str = "catalog";
pub const COLLECTION_NAME: &str = "items";

/// Parses the connection string and attaches any configured credential.
pub async fn client_options(settings: &MongoSettings) -> mongodb::error::Result<ClientOptions> {
    let uri = settings.connection_string();
    let mut options = ClientOptions::parse(uri.as_str()).await?;
    if let Some(credential) = settings.credential() {
        options.credential = Some(credential);
    }
    Ok(options)
}

/// Connect the async driver. The returned client pools connections and is
/// cheap to clone, so one instance serves every request.
pub fn create_client(options: ClientOptions) -> mongodb::error::Result<Client> {
    Client::with_options(options)
}

/// Connect the blocking driver. Must not be called from an async task; run it
/// on a blocking thread (e.g. `web::block`) when inside the server.
pub fn create_blocking_client(options: ClientOptions) -> mongodb::error::Result<sync::Client> {
    sync::Client::with_options(options)
}

pub fn items_collection(client: &Client) -> Collection<ItemDocument> {
    client.database(DATABASE_NAME).collection(COLLECTION_NAME)
}

pub fn blocking_items_collection(client: &sync::Client) -> sync::Collection<ItemDocument> {
    client.database(DATABASE_NAME).collection(COLLECTION_NAME)
}
