//! Shared fixtures for client tests.

use std::time::Duration;

use artsearch_core::CatalogEndpoint;
use wiremock::MockServer;

use crate::CatalogClient;


pub(crate) const TEST_KEY: &str = "test-key";

pub(crate) async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = test_client(&server);
    (server, client)
}

pub(crate) fn test_client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogEndpoint::new(server.uri(), TEST_KEY), Duration::from_secs(5))
        .unwrap()
}

pub(crate) fn object_page(
    server: &MockServer,
    titles: &[&str],
    next: Option<&str>,
    prev: Option<&str>,
) -> serde_json::Value {
    let cursor = |page: Option<&str>| {
        page.map(|p| format!("{}/object?apikey={TEST_KEY}&page={p}", server.uri()))
    };
    serde_json::json!({
        "info": {
            "totalrecords": titles.len(),
            "next": cursor(next),
            "prev": cursor(prev),
        },
        "records": titles
            .iter()
            .map(|t| serde_json::json!({"title": t, "objectnumber": "1.0"}))
            .collect::<Vec<_>>(),
    })
}
