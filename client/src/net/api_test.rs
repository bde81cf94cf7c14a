use futures::executor::block_on;

use super::*;

#[test]
fn concierge_endpoint_is_api_path() {
    assert_eq!(CONCIERGE_ENDPOINT, "/api/concierge");
}

#[test]
fn concierge_failed_message_formats_status() {
    assert_eq!(concierge_failed_message(502), "concierge request failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ask_concierge_falls_back_outside_browser() {
    assert_eq!(block_on(ask_concierge("hello")), CONCIERGE_FALLBACK_REPLY);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_delegates_to_ask_concierge() {
    assert_eq!(block_on(HttpConcierge.ask("hello")), CONCIERGE_FALLBACK_REPLY);
}
