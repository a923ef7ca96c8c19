//! Fetching travel options from a text generation model.

use super::extract::json_object_span;
use super::prompt::travel_prompt;
use super::types::{LookupResult, TravelOptions, TripRequest};
use crate::error::LookupError;
use crate::runtime::TextGenerator;
use std::sync::Arc;

/// Asks a model for travel options and parses its answer.
///
/// The generator is shared: build it once at startup and hand the same
/// `Arc` to every fetcher.
#[derive(Clone)]
pub struct OptionsFetcher {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for OptionsFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsFetcher").finish_non_exhaustive()
    }
}

impl OptionsFetcher {
    /// Create a fetcher on top of a generation capability
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Look up travel options; every failure is folded into
    /// [`LookupResult::Failed`].
    pub async fn fetch(&self, request: &TripRequest) -> LookupResult {
        self.fetch_options(request).await.into()
    }

    /// Look up travel options for textual trip parameters.
    pub async fn fetch_trip(&self, source: &str, destination: &str, date: &str) -> LookupResult {
        match TripRequest::parse(source, destination, date) {
            Ok(request) => self.fetch(&request).await,
            Err(err) => LookupResult::from(Err::<TravelOptions, _>(err)),
        }
    }

    /// Look up travel options, returning the typed error on failure.
    pub async fn fetch_options(&self, request: &TripRequest) -> Result<TravelOptions, LookupError> {
        let prompt = travel_prompt(request);

        tracing::info!(
            source = request.source(),
            destination = request.destination(),
            date = %request.iso_date(),
            "fetching travel options"
        );

        let raw = self.generator.generate(&prompt).await.map_err(|err| {
            tracing::error!(error = %err, "generation failed");
            LookupError::Transport(err)
        })?;

        let options = parse_travel_options(&raw)?;
        tracing::info!(
            flights = options.flights().len(),
            trains = options.trains().len(),
            buses = options.buses().len(),
            cabs = options.cabs().len(),
            "travel options parsed"
        );

        Ok(options)
    }
}

/// Extract and parse the travel options object embedded in raw model output.
pub fn parse_travel_options(raw: &str) -> Result<TravelOptions, LookupError> {
    let raw = raw.trim();

    let candidate = json_object_span(raw).ok_or_else(|| {
        tracing::warn!(raw_len = raw.len(), "no JSON object in model output");
        LookupError::Extraction
    })?;

    serde_json::from_str(candidate).map_err(|err| {
        tracing::warn!(error = %err, "model output is not valid travel options JSON");
        LookupError::Parse(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, EXTRACTION_ERROR_MESSAGE, PARSE_ERROR_MESSAGE};
    use crate::travel::TravelOption;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Generator that replays a canned answer and records prompts.
    struct Canned {
        answer: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn ok(answer: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(answer.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone().map_err(GenerationError::network)
        }
    }

    fn request() -> TripRequest {
        TripRequest::parse("Delhi", "Mumbai", "2026-11-02").unwrap()
    }

    const FIXED: &str = r#"{
        "flights": [{"airline": "IndiGo", "departure": "06:00", "arrival": "08:05", "duration": "2h 05m", "cost": 12000}],
        "trains": [{"name": "Rajdhani Express", "departure": "18:00", "arrival": "08:00", "duration": "14h", "cost": 2500}],
        "cabs": [{"cost": 8000, "duration": "9h"}]
    }"#;

    #[tokio::test]
    async fn test_fetch_wrapped_json() {
        let canned = Canned::ok(&format!("Here are your options:\n{}\nHave a nice trip!", FIXED));
        let fetcher = OptionsFetcher::new(canned.clone());

        let result = fetcher.fetch(&request()).await;
        let options = result.options().expect("lookup should succeed");

        let direct: TravelOptions = serde_json::from_str(FIXED).unwrap();
        assert_eq!(options, &direct);
        assert!(options.buses.is_none());

        let prompts = canned.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("from Delhi to Mumbai on 2026-11-02"));
    }

    #[tokio::test]
    async fn test_fetch_round_trips_structured_content() {
        let fetcher = OptionsFetcher::new(Canned::ok(FIXED));

        let result = fetcher.fetch(&request()).await;
        let reserialised = serde_json::to_value(result.options().unwrap()).unwrap();
        let original: Value = serde_json::from_str(FIXED).unwrap();

        assert_eq!(reserialised, original);
    }

    #[tokio::test]
    async fn test_fetch_without_braces_is_extraction_error() {
        let fetcher = OptionsFetcher::new(Canned::ok("Sorry, no trains run on that day."));

        let result = fetcher.fetch(&request()).await;
        assert_eq!(result.error(), Some(EXTRACTION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_fetch_empty_answer_is_extraction_error() {
        let fetcher = OptionsFetcher::new(Canned::ok("   "));

        let result = fetcher.fetch(&request()).await;
        assert_eq!(result.error(), Some(EXTRACTION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_fetch_invalid_span_is_parse_error() {
        let fetcher = OptionsFetcher::new(Canned::ok("prefix {not json} suffix"));

        let result = fetcher.fetch(&request()).await;
        assert_eq!(result.error(), Some(PARSE_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure_uses_underlying_message() {
        let fetcher = OptionsFetcher::new(Canned::failing("connection refused"));

        let result = fetcher.fetch(&request()).await;
        assert_eq!(result.error(), Some("Network error: connection refused"));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "Network error: connection refused"})
        );
    }

    #[tokio::test]
    async fn test_fetch_trip_validates_before_calling_model() {
        let canned = Canned::ok(FIXED);
        let fetcher = OptionsFetcher::new(canned.clone());

        let result = fetcher.fetch_trip("", "Mumbai", "2026-11-02").await;
        assert_eq!(
            result.error(),
            Some(crate::error::MISSING_ENDPOINTS_MESSAGE)
        );
        assert!(canned.prompts.lock().unwrap().is_empty());

        let result = fetcher.fetch_trip("Delhi", "Mumbai", "2026-11-02").await;
        assert!(result.is_found());
    }

    #[test]
    fn test_parse_non_list_category_is_kept() {
        let raw = r#"{"flights": "none today", "trains": [{"name": "Duronto", "cost": 1900}]}"#;
        let options = parse_travel_options(raw).unwrap();

        assert!(options.flights().is_empty());
        assert_eq!(options.trains().len(), 1);
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::from_str::<Value>(raw).unwrap()
        );
    }

    #[test]
    fn test_parse_trailing_prose_with_braces() {
        let options =
            parse_travel_options(r#"{"buses": [{"operator": "VRL", "cost": 1500}]} {see notes}"#)
                .unwrap();
        assert_eq!(options.buses()[0].carrier().as_deref(), Some("VRL"));
    }

    #[test]
    fn test_parse_numeric_descriptive_fields() {
        let raw = r#"Here you go: {"flights": [{"airline": "IndiGo", "duration": 2, "cost": 12000}], "trains": [{"name": 12951, "cost": 2500}]}"#;
        let options = parse_travel_options(raw).unwrap();

        let direct: TravelOptions = serde_json::from_str(json_object_span(raw).unwrap()).unwrap();
        assert_eq!(options, direct);
        assert_eq!(options.flights()[0].duration().as_deref(), Some("2"));
        assert_eq!(options.trains()[0].carrier().as_deref(), Some("12951"));
    }

    #[tokio::test]
    async fn test_fetch_round_trips_mixed_value_types() {
        let answer = json!({
            "flights": null,
            "trains": [{"name": 12951, "departure": "16:55", "arrival": null, "duration": 16.5, "cost": "2500", "pantry": true}],
            "buses": [{"operator": "VRL", "cost": 1500, "amenities": ["wifi", "blanket"]}],
            "cabs": [{"cost": 8000, "duration": {"hours": 9}}],
            "currency": "INR"
        });
        let fetcher = OptionsFetcher::new(Canned::ok(&format!("Options:\n{}\nEnjoy!", answer)));

        let result = fetcher.fetch(&request()).await;
        assert!(result.is_found());
        assert_eq!(serde_json::to_value(&result).unwrap(), answer);
    }
}
