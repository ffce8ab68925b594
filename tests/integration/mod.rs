//! Shared setup for the integration tests.

pub mod end_to_end_test;
pub mod http_test;

use std::sync::Once;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Installs env_logger once for the whole test binary.
pub fn init_test_env() {
    INIT.call_once(|| {
        sdk_utils::logging::init_logging();
    });
}

/// Starts a mock server with logging initialised.
pub async fn start_server() -> MockServer {
    init_test_env();
    MockServer::start().await
}

/// Returns an address on localhost that nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}
