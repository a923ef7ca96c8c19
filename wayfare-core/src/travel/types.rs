//! Travel domain types.

use crate::error::{LookupError, MISSING_ENDPOINTS_MESSAGE};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// A single lookup request: where from, where to, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    source: String,
    destination: String,
    date: NaiveDate,
}

impl TripRequest {
    /// Create a trip request; both endpoints must contain non-whitespace text.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, LookupError> {
        let source = source.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        if source.is_empty() || destination.is_empty() {
            return Err(LookupError::invalid_trip(MISSING_ENDPOINTS_MESSAGE));
        }

        Ok(Self {
            source,
            destination,
            date,
        })
    }

    /// Create a trip request from a textual date (`YYYY-MM-DD` or `YYYY/MM/DD`).
    pub fn parse(
        source: impl Into<String>,
        destination: impl Into<String>,
        date: &str,
    ) -> Result<Self, LookupError> {
        let date = parse_date(date)?;
        Self::new(source, destination, date)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date in ISO 8601 form, as embedded in prompts
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parse a calendar date written as `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, LookupError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .map_err(|_| {
            LookupError::invalid_trip(format!(
                "Invalid date format: {}. Use YYYY-MM-DD or YYYY/MM/DD",
                s
            ))
        })
}

/// Travel option category, in canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Flight,
    Train,
    Bus,
    Cab,
}

impl Category {
    /// All categories in iteration order
    pub const ALL: [Category; 4] = [
        Category::Flight,
        Category::Train,
        Category::Bus,
        Category::Cab,
    ];

    /// Key of this category in the options JSON object
    pub fn key(self) -> &'static str {
        match self {
            Category::Flight => "flights",
            Category::Train => "trains",
            Category::Bus => "buses",
            Category::Cab => "cabs",
        }
    }

    /// Singular display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Flight => "Flight",
            Category::Train => "Train",
            Category::Bus => "Bus",
            Category::Cab => "Cab",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw `cost` value as returned by the model.
///
/// The value is kept verbatim so that re-serialising a parsed response gives
/// back the same JSON. Only [`Cost::amount`] interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(pub Value);

impl Cost {
    /// Numeric amount, if the value is a finite non-negative JSON number.
    ///
    /// Strings are never compared, even when they spell a number.
    pub fn amount(&self) -> Option<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64().filter(|a| a.is_finite() && *a >= 0.0),
            _ => None,
        }
    }
}

impl From<f64> for Cost {
    fn from(amount: f64) -> Self {
        Cost(Value::from(amount))
    }
}

impl From<u64> for Cost {
    fn from(amount: u64) -> Self {
        Cost(Value::from(amount))
    }
}

/// Deserialize a key that is present, so an explicit `null` becomes
/// `Some(..)` rather than collapsing into an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Display text of a descriptive value; `null` reads as missing.
fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// Behaviour shared by every travel option variant.
///
/// Descriptive fields are whatever JSON the model wrote; accessors render
/// them as text.
pub trait TravelOption {
    /// Category this option belongs to
    const CATEGORY: Category;

    /// Raw cost, if the model supplied one
    fn cost(&self) -> Option<&Cost>;

    /// Name of the carrier, if the variant has one
    fn carrier(&self) -> Option<Cow<'_, str>>;

    fn departure(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn arrival(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn duration(&self) -> Option<Cow<'_, str>>;

    /// Numeric cost usable for comparison
    fn amount(&self) -> Option<f64> {
        self.cost().and_then(Cost::amount)
    }
}

macro_rules! scheduled_option {
    ($(#[$meta:meta])* $name:ident, $carrier:ident, $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
            pub $carrier: Option<Value>,
            #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
            pub departure: Option<Value>,
            #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
            pub arrival: Option<Value>,
            #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
            pub duration: Option<Value>,
            #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
            pub cost: Option<Cost>,
            /// Fields the model added beyond the documented shape
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }

        impl TravelOption for $name {
            const CATEGORY: Category = $category;

            fn cost(&self) -> Option<&Cost> {
                self.cost.as_ref()
            }

            fn carrier(&self) -> Option<Cow<'_, str>> {
                text(self.$carrier.as_ref())
            }

            fn departure(&self) -> Option<Cow<'_, str>> {
                text(self.departure.as_ref())
            }

            fn arrival(&self) -> Option<Cow<'_, str>> {
                text(self.arrival.as_ref())
            }

            fn duration(&self) -> Option<Cow<'_, str>> {
                text(self.duration.as_ref())
            }
        }
    };
}

scheduled_option!(
    /// A flight offer
    Flight,
    airline,
    Category::Flight
);

scheduled_option!(
    /// A train offer
    Train,
    name,
    Category::Train
);

scheduled_option!(
    /// A bus offer
    Bus,
    operator,
    Category::Bus
);

/// A private cab offer; cabs have no named carrier or schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cab {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TravelOption for Cab {
    const CATEGORY: Category = Category::Cab;

    fn cost(&self) -> Option<&Cost> {
        self.cost.as_ref()
    }

    fn carrier(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn duration(&self) -> Option<Cow<'_, str>> {
        text(self.duration.as_ref())
    }
}

/// Value under one category key.
///
/// Anything other than a list of option objects (`null`, a sentence, a list
/// of plain strings) is kept as written and reads as no options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Options(Vec<T>),
    Other(Value),
}

impl<T> Listing<T> {
    /// Options in this listing, empty when the model wrote something else
    pub fn options(&self) -> &[T] {
        match self {
            Listing::Options(options) => options,
            Listing::Other(_) => &[],
        }
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(options: Vec<T>) -> Self {
        Listing::Options(options)
    }
}

/// Travel options grouped by category.
///
/// A category key the model left out stays `None`; one set to `null` or to a
/// non-list value is kept as [`Listing::Other`]. Both read as an empty list
/// and serialise back exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelOptions {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub flights: Option<Listing<Flight>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub trains: Option<Listing<Train>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub buses: Option<Listing<Bus>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cabs: Option<Listing<Cab>>,
    /// Top-level keys outside the four categories
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn listed<T>(listing: &Option<Listing<T>>) -> &[T] {
    listing.as_ref().map(Listing::options).unwrap_or_default()
}

impl TravelOptions {
    pub fn flights(&self) -> &[Flight] {
        listed(&self.flights)
    }

    pub fn trains(&self) -> &[Train] {
        listed(&self.trains)
    }

    pub fn buses(&self) -> &[Bus] {
        listed(&self.buses)
    }

    pub fn cabs(&self) -> &[Cab] {
        listed(&self.cabs)
    }

    /// Number of options in `category`
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Flight => self.flights().len(),
            Category::Train => self.trains().len(),
            Category::Bus => self.buses().len(),
            Category::Cab => self.cabs().len(),
        }
    }

    /// True when no category holds any option
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.count(*c) == 0)
    }

    /// Every option with a usable amount, in category then list order
    pub fn priced(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        fn amounts<T: TravelOption>(options: &[T]) -> impl Iterator<Item = (Category, f64)> + '_ {
            options
                .iter()
                .filter_map(|option| option.amount().map(|amount| (T::CATEGORY, amount)))
        }

        amounts(self.flights())
            .chain(amounts(self.trains()))
            .chain(amounts(self.buses()))
            .chain(amounts(self.cabs()))
    }
}

/// Outcome of one lookup, in the shape handed to the presentation layer.
///
/// Serialises as the options object on success and as `{"error": "..."}` on
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResult {
    Failed { error: String },
    Found(TravelOptions),
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            LookupResult::Failed { error } => Some(error),
            LookupResult::Found(_) => None,
        }
    }

    /// The options, if the lookup succeeded
    pub fn options(&self) -> Option<&TravelOptions> {
        match self {
            LookupResult::Found(options) => Some(options),
            LookupResult::Failed { .. } => None,
        }
    }
}

impl From<Result<TravelOptions, LookupError>> for LookupResult {
    fn from(result: Result<TravelOptions, LookupError>) -> Self {
        match result {
            Ok(options) => LookupResult::Found(options),
            Err(err) => LookupResult::Failed {
                error: err.to_string(),
            },
        }
    }
}
