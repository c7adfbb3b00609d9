use actix_web::{web, Responder};

use crate::models::location::{LocationsRequest, LocationsResponse};
use crate::models::response::ZolaResponse;
use crate::services::tripadvisor_service::DEFAULT_SEARCH_LIMIT;
use crate::state::AppState;

const MAX_SEARCH_LIMIT: usize = 10;

/*
    /get-locations
*/
pub async fn get_locations(
    state: web::Data<AppState>,
    input: web::Json<LocationsRequest>,
) -> impl Responder {
    let request = input.into_inner();
    let queries: Vec<String> = request
        .queries
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();
    if queries.is_empty() {
        return ZolaResponse::bad_request("queries must not be empty");
    }

    let limit = request
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let locations = state
        .tripadvisor
        .locations_for_queries(&queries, request.category.as_deref(), limit)
        .await;

    ZolaResponse::success(LocationsResponse {
        total_count: locations.len(),
        locations,
    })
}
