mod common;

use actix_web::test;

use common::TestApp;

#[actix_rt::test]
async fn test_root_banner() {
    let test_app = TestApp::new("http://127.0.0.1:1");
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["service"], "Zola Backend");
    assert_eq!(body["data"]["endpoints"]["create_itinerary"], "/create-itinerary");
}

#[actix_rt::test]
async fn test_health_reports_cache_and_keys() {
    let test_app = TestApp::new("http://127.0.0.1:1");
    test_app.seed_cache(3);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["image_cache"]["count"], 3);
    assert_eq!(body["data"]["image_cache"]["target"], 150);
}

#[actix_rt::test]
async fn test_health_degraded_without_keys() {
    let test_app = TestApp::with_config("http://127.0.0.1:1", |config| {
        config.openai.provider.api_key = None;
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["providers"]["openai"], false);
    assert_eq!(body["data"]["providers"]["unsplash"], true);
}

#[actix_rt::test]
async fn test_unknown_route() {
    let test_app = TestApp::new("http://127.0.0.1:1");
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
