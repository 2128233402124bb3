//! Skips socket-bound tests where localhost cannot be bound, unless
//! `FUSKER_REQUIRE_SOCKET_TESTS` asks for a hard failure instead.

use std::net::TcpListener as StdTcpListener;
use std::panic::Location;

use tokio::net::TcpListener;
use wiremock::MockServer;

const REQUIRE_ENV: &str = "FUSKER_REQUIRE_SOCKET_TESTS";

fn socket_tests_required() -> bool {
    std::env::var(REQUIRE_ENV)
        .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn skip_or_panic(location: &Location<'_>) -> bool {
    let message = format!(
        "localhost is not bindable here ({}:{})",
        location.file(),
        location.line()
    );
    assert!(
        !socket_tests_required(),
        "{message}; unset {REQUIRE_ENV} to skip instead"
    );
    eprintln!("{message}; skipping");
    true
}

#[track_caller]
fn should_skip_socket_bound_test() -> bool {
    if StdTcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }
    skip_or_panic(Location::caller())
}

/// Starts a wiremock server, or returns `None` when the test should skip.
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if should_skip_socket_bound_test() {
        None
    } else {
        Some(MockServer::start().await)
    }
}

/// Binds a raw listener for tests that need to misbehave below HTTP,
/// such as truncating a body.
#[track_caller]
pub fn bind_local_listener_or_skip() -> impl std::future::Future<Output = Option<TcpListener>> {
    let location = Location::caller();
    async move {
        match TcpListener::bind("127.0.0.1:0").await {
            Ok(listener) => Some(listener),
            Err(_) => {
                skip_or_panic(location);
                None
            }
        }
    }
}
