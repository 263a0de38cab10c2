mod harness;

use harness::catalog;
use harness::routes::resource_routes;
use harness::server::TestServer;
use harness::test_config;
use tempfile::TempDir;

#[tokio::test]
async fn catalog_outage_degrades_to_a_well_formed_response() {
    let dir = TempDir::new().unwrap();
    let config = test_config(catalog::catalog_without_auth(&dir));
    let server = TestServer::start(config, resource_routes()).await.unwrap();

    // /Me raises Unauthorized, whose auth.required code is missing from
    // every locale in this catalog
    let resp = server.client().get(server.url("/Me")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "GenericException");
    assert_eq!(body["statusCode"]["value"], 500);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("auth.required"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn server_keeps_serving_after_a_resolver_fault() {
    let dir = TempDir::new().unwrap();
    let config = test_config(catalog::catalog_without_auth(&dir));
    let server = TestServer::start(config, resource_routes()).await.unwrap();

    let resp = server.client().get(server.url("/Me")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    // Codes that do resolve are unaffected
    let resp = server.client().get(server.url("/Users/alice")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "UserNotFoundException");
}
