use actix_web::{web, Responder};

use crate::models::itinerary::ItineraryResponse;
use crate::models::plan::Plan;
use crate::models::response::ZolaResponse;
use crate::state::AppState;

/*
    /create-itinerary
*/
pub async fn create_itinerary(
    state: web::Data<AppState>,
    input: web::Json<Plan>,
) -> impl Responder {
    let plan = input.into_inner();
    if let Err(e) = plan.validate() {
        return ZolaResponse::bad_request(e);
    }

    log::info!(
        "Creating itinerary for {} ({} people, {})",
        plan.location,
        plan.num_people,
        plan.date_range()
    );

    match state.itineraries.create_itinerary(&plan).await {
        Ok(itinerary) => ZolaResponse::success(ItineraryResponse { itinerary }),
        Err(e) => {
            log::error!("Itinerary generation failed: {}", e);
            ZolaResponse::bad_gateway(format!("Failed to create itinerary: {}", e))
        }
    }
}
