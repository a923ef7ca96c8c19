//! Instruction prompt sent to the model for a travel lookup.

use super::types::TripRequest;

/// Example payload shown to the model to anchor the output format.
pub const EXAMPLE_RESPONSE: &str = r#"{
    "flights": [{"airline": "IndiGo", "departure": "06:00", "arrival": "08:05", "duration": "2h 05m", "cost": 12000}],
    "trains": [{"name": "Rajdhani Express", "departure": "18:00", "arrival": "08:00", "duration": "14h", "cost": 2500}],
    "buses": [{"operator": "VRL Travels", "departure": "21:00", "arrival": "07:00", "duration": "10h", "cost": 1500}],
    "cabs": [{"cost": 8000, "duration": "9h"}]
}"#;

/// Build the lookup prompt for a trip.
pub fn travel_prompt(request: &TripRequest) -> String {
    format!(
        "You are a travel assistant. Provide structured travel options from {source} to {destination} on {date}.\n\
         Return ONLY JSON, without explanations, like this:\n\n\
         {example}\n\n\
         IMPORTANT:\n\
         1. Only return the JSON object, nothing else\n\
         2. Use the keys \"flights\", \"trains\", \"buses\" and \"cabs\", each an array\n\
         3. Flights have airline, departure, arrival, duration and cost\n\
         4. Trains have name, departure, arrival, duration and cost\n\
         5. Buses have operator, departure, arrival, duration and cost\n\
         6. Cabs have duration and cost\n\
         7. Every cost is a plain number without currency symbols",
        source = request.source(),
        destination = request.destination(),
        date = request.iso_date(),
        example = EXAMPLE_RESPONSE,
    )
}
