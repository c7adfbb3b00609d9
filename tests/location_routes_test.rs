mod common;

use actix_web::test;
use mockito::{Matcher, Server};
use serde_json::json;

use common::TestApp;

fn details(id: &str, name: &str) -> String {
    json!({
        "location_id": id,
        "name": name,
        "rating": "4.0",
        "category": { "name": "attraction", "localized_name": "Attraction" },
        "address_obj": { "street1": "1 Main St", "city": "New York City" },
        "styles": [],
        "trip_types": [{ "name": "friends", "localized_name": "Friends getaway" }]
    })
    .to_string()
}

async fn mock_search(server: &mut Server, ids: &[&str]) -> mockito::Mock {
    let data: Vec<_> = ids
        .iter()
        .map(|id| json!({ "location_id": id, "name": format!("Place {}", id) }))
        .collect();

    server
        .mock("GET", "/location/search")
        .match_query(Matcher::UrlEncoded("searchQuery".into(), "New York attractions".into()))
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": data }).to_string())
        .create_async()
        .await
}

#[actix_rt::test]
async fn test_photo_failure_only_clears_photo_url() {
    let mut server = Server::new_async().await;
    mock_search(&mut server, &["101", "202"]).await;

    for (id, name) in [("101", "Central Park"), ("202", "The High Line")] {
        server
            .mock("GET", format!("/location/{}/details", id).as_str())
            .match_query(Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(details(id, name))
            .create_async()
            .await;
    }
    server
        .mock("GET", "/location/101/photos")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "data": [{ "images": { "original": { "url": "https://media/101.jpg" } } }] })
                .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/location/202/photos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let test_app = TestApp::new(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/get-locations")
        .set_json(json!({ "queries": ["New York attractions"] }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["total_count"], 2);

    let locations = body["data"]["locations"].as_array().unwrap();
    assert_eq!(locations[0]["name"], "Central Park");
    assert_eq!(locations[0]["photo_url"], "https://media/101.jpg");
    assert_eq!(locations[0]["rating"], 4.0);
    assert_eq!(locations[0]["address"], "1 Main St, New York City");
    assert_eq!(locations[0]["trip_types"], json!(["Friends getaway"]));

    assert_eq!(locations[1]["name"], "The High Line");
    assert_eq!(locations[1]["category"], "attraction");
    assert!(locations[1]["photo_url"].is_null());
}

#[actix_rt::test]
async fn test_failed_details_skip_only_that_location() {
    let mut server = Server::new_async().await;
    mock_search(&mut server, &["101", "202"]).await;

    server
        .mock("GET", "/location/101/details")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/location/202/details")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(details("202", "The High Line"))
        .create_async()
        .await;
    server
        .mock("GET", "/location/202/photos")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": [] }).to_string())
        .create_async()
        .await;

    let test_app = TestApp::new(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/get-locations")
        .set_json(json!({ "queries": ["New York attractions"], "limit": 5 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["locations"][0]["location_id"], "202");
    assert!(body["data"]["locations"][0]["photo_url"].is_null());
}

#[actix_rt::test]
async fn test_search_respects_limit() {
    let mut server = Server::new_async().await;
    mock_search(&mut server, &["1", "2", "3"]).await;
    server
        .mock("GET", "/location/1/details")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(details("1", "Only One"))
        .create_async()
        .await;
    server
        .mock("GET", "/location/1/photos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let untouched = server
        .mock("GET", Matcher::Regex(r"^/location/[23]/".into()))
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let test_app = TestApp::new(&server.url());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/get-locations")
        .set_json(json!({ "queries": ["New York attractions"], "limit": 1 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["total_count"], 1);
    untouched.assert_async().await;
}

#[actix_rt::test]
async fn test_get_locations_requires_queries() {
    let test_app = TestApp::new("http://127.0.0.1:1");
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/get-locations")
        .set_json(json!({ "queries": ["  "] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
