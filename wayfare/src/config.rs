//! Command line configuration for the `wayfare` binary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use std::time::Duration;
use wayfare::layer::{LoggingLayer, TimeoutLayer};
use wayfare::plugin::RawResponsePlugin;
use wayfare::provider::{
    OpenAiBuilder, OpenAiProvider, DEEPSEEK_API_BASE, DEFAULT_GEMINI_MODEL, GEMINI_API_BASE,
};
use wayfare::{ModelClient, RuntimeExecutor};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "wayfare")]
#[command(author, version, about = "Find travel options between two places with an AI model", long_about = None)]
pub struct CliArgs {
    /// Source location (e.g., Delhi)
    #[arg(short, long)]
    pub from: String,

    /// Destination (e.g., Mumbai)
    #[arg(short, long)]
    pub to: String,

    /// Travel date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Model provider
    #[arg(long, value_enum, default_value_t = ProviderKind::Gemini)]
    pub provider: ProviderKind,

    /// Model id; defaults to the provider's recommended model
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key for the provider
    #[arg(long, env = "WAYFARE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Override the provider endpoint (any OpenAI-compatible base URL)
    #[arg(long, env = "WAYFARE_API_BASE")]
    pub api_base: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Give up on the model after this many seconds
    #[arg(long, default_value = "120")]
    pub timeout_secs: u64,

    /// Ask the provider for its JSON object response mode
    #[arg(long)]
    pub json_mode: bool,

    /// Print the lookup result as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,

    /// Echo the raw model response
    #[arg(long)]
    pub show_raw: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported model providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    Gemini,
    Openai,
    Deepseek,
}

impl ProviderKind {
    fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
            ProviderKind::Openai => "gpt-4o-mini",
            ProviderKind::Deepseek => "deepseek-chat",
        }
    }

    fn builder(self, api_key: &str) -> OpenAiBuilder {
        let builder = OpenAiProvider::builder().api_key(api_key);
        match self {
            ProviderKind::Gemini => builder.api_base(GEMINI_API_BASE),
            ProviderKind::Openai => builder,
            ProviderKind::Deepseek => builder.api_base(DEEPSEEK_API_BASE),
        }
    }

    fn id(self) -> (&'static str, &'static str) {
        match self {
            ProviderKind::Gemini => ("gemini", "Gemini"),
            ProviderKind::Openai => ("openai", "OpenAI"),
            ProviderKind::Deepseek => ("deepseek", "DeepSeek"),
        }
    }
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    wayfare::travel::parse_date(s).map_err(|e| e.to_string())
}

/// Model client plus the diagnostic plugin it was built with
pub struct Client {
    pub model: ModelClient,
    pub raw_response: Arc<RawResponsePlugin>,
}

impl CliArgs {
    /// Model id after applying the provider default
    pub fn model_id(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Build the provider stack described by the arguments.
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = self.provider.builder(&self.api_key);
        if let Some(api_base) = &self.api_base {
            builder = builder.api_base(api_base);
        }

        let (id, name) = self.provider.id();
        let provider = builder
            .build_with_id(id, name)
            .with_context(|| format!("failed to configure {} provider", name))?;

        let raw_response = Arc::new(RawResponsePlugin::new());
        let executor = RuntimeExecutor::builder(provider)
            .layer(TimeoutLayer::new(Duration::from_secs(self.timeout_secs)))
            .layer(LoggingLayer::new())
            .plugin(raw_response.clone())
            .finish();

        let mut model = ModelClient::new(Arc::new(executor), self.model_id())
            .with_json_mode(self.json_mode);
        if let Some(temperature) = self.temperature {
            model = model.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            model = model.with_max_tokens(max_tokens);
        }

        Ok(Client {
            model,
            raw_response,
        })
    }
}
