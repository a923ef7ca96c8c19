//! End-to-end lookup through the runtime stack with a scripted provider.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wayfare::error::{EXTRACTION_ERROR_MESSAGE, PARSE_ERROR_MESSAGE};
use wayfare::layer::{LoggingLayer, TimeoutLayer};
use wayfare::plugin::RawResponsePlugin;
use wayfare::travel::{summarize, Category, Recommendation, TravelOption};
use wayfare::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, FinishReason, GenerationError,
    LookupResult, Message, ModelClient, OptionsFetcher, Provider, ProviderInfo, RuntimeExecutor,
    TripRequest, Usage,
};

const ANSWER: &str = r#"Sure! Here are the options you asked for:
```json
{
    "flights": [{"airline": "IndiGo", "departure": "06:00", "arrival": "08:05", "duration": "2h 05m", "cost": 12000}],
    "trains": [{"name": "Rajdhani Express", "departure": "18:00", "arrival": "08:00", "duration": "14h", "cost": 2500}],
    "buses": [{"operator": "VRL Travels", "departure": "21:00", "arrival": "07:00", "duration": "10h", "cost": 1500}],
    "cabs": [{"cost": 8000, "duration": "9h"}]
}
```
Prices are indicative {subject to availability}."#;

#[derive(Debug)]
struct ScriptedProvider {
    answer: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(answer: Result<&str, &str>) -> Self {
        Self {
            answer: answer.map(str::to_string).map_err(str::to_string),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        Arc::new(ProviderInfo {
            id: "scripted".to_string(),
            name: "Scripted".to_string(),
        })
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let prompt = req.messages.iter().map(Message::text).collect::<Vec<_>>().join("\n");
        self.prompts.lock().unwrap().push(prompt);

        let text = self.answer.clone().map_err(GenerationError::provider)?;
        Ok(ChatCompletionResponse {
            id: "resp-1".to_string(),
            model: req.model,
            choices: vec![Choice {
                index: 0,
                message: Message::assistant(text),
                finish_reason: FinishReason::Stop,
            }],
            usage: Usage::default(),
            created: None,
        })
    }
}

struct Stack {
    fetcher: OptionsFetcher,
    raw: Arc<RawResponsePlugin>,
}

fn stack(answer: Result<&str, &str>) -> Stack {
    let raw = Arc::new(RawResponsePlugin::new());
    let executor = RuntimeExecutor::builder(ScriptedProvider::new(answer))
        .layer(TimeoutLayer::new(Duration::from_secs(5)))
        .layer(LoggingLayer::new())
        .plugin(raw.clone())
        .finish();

    let client = ModelClient::new(Arc::new(executor), "test-model");
    Stack {
        fetcher: OptionsFetcher::new(Arc::new(client)),
        raw,
    }
}

fn request() -> TripRequest {
    TripRequest::parse("Delhi", "Mumbai", "2026-11-02").unwrap()
}

#[tokio::test]
async fn test_lookup_and_summarize() {
    let stack = stack(Ok(ANSWER));

    let result = stack.fetcher.fetch(&request()).await;
    let options = result.options().expect("lookup should succeed");

    assert_eq!(options.flights().len(), 1);
    assert_eq!(options.buses()[0].carrier().as_deref(), Some("VRL Travels"));

    let recommendation = Recommendation::from_options(options);
    assert_eq!(recommendation.cheapest, Some((Category::Bus, 1500.0)));
    assert!(recommendation.flights_fastest);

    let summary = summarize(options);
    assert!(summary.starts_with("### "));
    assert!(summary.contains("*Bus* at ₹1500"));
    assert!(summary.contains("fastest option is *Flight*"));

    assert_eq!(stack.raw.latest().as_deref().map(String::as_str), Some(ANSWER));
}

#[tokio::test]
async fn test_lookup_result_json_matches_embedded_object() {
    let stack = stack(Ok(ANSWER));

    let result = stack.fetcher.fetch(&request()).await;
    let start = ANSWER.find('{').unwrap();
    let end = ANSWER.find("\n```\nPrices").unwrap();
    let embedded: Value = serde_json::from_str(&ANSWER[start..end]).unwrap();

    assert_eq!(serde_json::to_value(&result).unwrap(), embedded);
}

#[tokio::test]
async fn test_prose_only_answer() {
    let stack = stack(Ok("I'm sorry, I can't look up live schedules."));

    let result = stack.fetcher.fetch(&request()).await;
    assert_eq!(result.error(), Some(EXTRACTION_ERROR_MESSAGE));
    assert!(stack.raw.latest().is_some());
}

#[tokio::test]
async fn test_malformed_json_answer() {
    let stack = stack(Ok(r#"{"flights": [{"airline": "IndiGo", "cost": 12000,}]}"#));

    let result = stack.fetcher.fetch(&request()).await;
    assert_eq!(result.error(), Some(PARSE_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_provider_failure() {
    let stack = stack(Err("quota exhausted"));

    let result = stack.fetcher.fetch(&request()).await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"error": "Provider error: quota exhausted"})
    );
    assert!(stack.raw.latest().is_none());
}

#[tokio::test]
async fn test_empty_object_summarizes_to_header() {
    let stack = stack(Ok("{}"));

    let result = stack.fetcher.fetch(&request()).await;
    let options = result.options().unwrap();

    assert!(options.is_empty());
    assert_eq!(summarize(options).lines().count(), 1);
}

#[test]
fn test_lookup_result_variants_are_exclusive() {
    let found = LookupResult::Found(Default::default());
    assert!(found.is_found() && found.error().is_none());

    let failed = LookupResult::Failed {
        error: "boom".to_string(),
    };
    assert!(!failed.is_found() && failed.options().is_none());
}
