//! Shared MongoDB container setup for the integration tests.

// Each test crate uses a different subset of these helpers.
#![allow(dead_code)]

use catalog_service::config::MongoSettings;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

pub fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Starts a throwaway MongoDB. The container stops when the returned handle
/// is dropped.
pub async fn start_mongo() -> (ContainerAsync<GenericImage>, MongoSettings) {
    // Pre-allocate the host port; `get_host_port_ipv4` is unreliable on Podman.
    let port = free_port();
    let container = GenericImage::new("mongo", "7")
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .with_mapped_port(port, ContainerPort::Tcp(27017))
        .start()
        .await
        .expect("Failed to start MongoDB container");
    let settings = MongoSettings {
        uri: None,
        host: "127.0.0.1".to_string(),
        port,
        user: None,
        password: None,
    };
    (container, settings)
}
