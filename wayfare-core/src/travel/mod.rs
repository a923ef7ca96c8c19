//! Travel options lookup.
//!
//! `TripRequest` → [`OptionsFetcher`] → [`TravelOptions`] → [`summarize`].

pub mod extract;
pub mod fetcher;
pub mod prompt;
pub mod render;
pub mod summary;
pub mod types;

pub use extract::json_object_span;
pub use fetcher::{parse_travel_options, OptionsFetcher};
pub use prompt::travel_prompt;
pub use render::{render_intro, render_options};
pub use summary::{summarize, Recommendation};
pub use types::{
    parse_date, Bus, Cab, Category, Cost, Flight, Listing, LookupResult, Train, TravelOption,
    TravelOptions, TripRequest,
};
