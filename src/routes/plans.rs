use actix_web::{http::StatusCode, web, Responder};
use serde_json::json;

use crate::models::plan::{Plan, PlanFilter};
use crate::models::response::ZolaResponse;
use crate::state::AppState;

/*
    POST /plans
*/
pub async fn create(state: web::Data<AppState>, input: web::Json<Plan>) -> impl Responder {
    let plan = input.into_inner();
    let mood = match plan.validate_record() {
        Ok(mood) => mood,
        Err(e) => return ZolaResponse::bad_request(e),
    };

    let record = state.plans.create(plan, mood);
    log::info!("Created plan {} ({})", record.id, record.mood.as_str());
    ZolaResponse::success(record)
}

/*
    GET /plans?mood=&location=&min_people=&max_people=
*/
pub async fn get_all(
    state: web::Data<AppState>,
    filter: web::Query<PlanFilter>,
) -> impl Responder {
    let plans: Vec<_> = state
        .plans
        .list()
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect();

    ZolaResponse::success(json!({ "count": plans.len(), "plans": plans }))
}

/*
    GET /plans/{id}
*/
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id: u64 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return ZolaResponse::bad_request("Invalid ID"),
    };

    match state.plans.get(id) {
        Some(record) => ZolaResponse::success(record),
        None => ZolaResponse::error(StatusCode::NOT_FOUND, "Plan not found"),
    }
}
