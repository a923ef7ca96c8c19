//! Cheapest-option recommendation.

use super::types::{Category, TravelOptions};

/// First line of every summary.
pub const SUMMARY_HEADER: &str = "### 🔹 Travel Recommendations Summary:";

/// Static claim emitted whenever flights are on offer.
pub const FLIGHTS_FASTEST_LINE: &str = "⚡ The fastest option is *Flight* (around 1-2 hours).";

/// Recommendation derived from a set of travel options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// Cheapest priced option; ties keep the first in category/list order
    pub cheapest: Option<(Category, f64)>,
    /// Flights are listed, so they are presented as the fastest choice
    pub flights_fastest: bool,
}

impl Recommendation {
    pub fn from_options(options: &TravelOptions) -> Self {
        let cheapest = options.priced().fold(None, |best, (category, amount)| match best {
            Some((_, best_amount)) if best_amount <= amount => best,
            _ => Some((category, amount)),
        });

        Self {
            cheapest,
            flights_fastest: !options.flights().is_empty(),
        }
    }

    /// Render as the Markdown summary block
    pub fn render(&self) -> String {
        let mut lines = vec![SUMMARY_HEADER.to_string()];

        if let Some((category, amount)) = self.cheapest {
            lines.push(format!(
                "✔ The cheapest option is *{}* at ₹{}.",
                category,
                format_amount(amount)
            ));
        }

        if self.flights_fastest {
            lines.push(FLIGHTS_FASTEST_LINE.to_string());
        }

        lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}

/// Summarise travel options as a short Markdown recommendation.
pub fn summarize(options: &TravelOptions) -> String {
    Recommendation::from_options(options).render()
}

/// Whole amounts print without a fractional part.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{:.0}", amount)
    } else {
        format!("{}", amount)
    }
}
