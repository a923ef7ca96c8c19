//! Markdown rendering of lookup results for display.

use super::summary::format_amount;
use super::types::{Category, Cost, TravelOption, TravelOptions, TripRequest};
use std::borrow::Cow;

const MISSING: &str = "-";

/// Opening sentence shown above the results.
pub fn render_intro(request: &TripRequest) -> String {
    format!(
        "Okay, I have found the best travel options from *{}* to *{}* on *{}*.",
        request.source(),
        request.destination(),
        request.date().format("%B %d, %Y")
    )
}

/// Section heading for a category
pub fn section_title(category: Category) -> &'static str {
    match category {
        Category::Flight => "✈ Flights",
        Category::Train => "🚆 Trains",
        Category::Bus => "🚌 Buses",
        Category::Cab => "🚖 Cabs",
    }
}

/// Render every non-empty category as a Markdown section.
pub fn render_options(options: &TravelOptions) -> String {
    let mut out = String::new();
    render_section(&mut out, options.flights());
    render_section(&mut out, options.trains());
    render_section(&mut out, options.buses());
    render_section(&mut out, options.cabs());
    out
}

fn render_section<T: TravelOption>(out: &mut String, options: &[T]) {
    if options.is_empty() {
        return;
    }

    let mut lines = vec![format!("#### {}", section_title(T::CATEGORY))];

    for option in options {
        let carrier = match T::CATEGORY {
            Category::Cab => Cow::Borrowed("Private Cab"),
            _ => or_missing(option.carrier()),
        };
        lines.push(format!("- *{}*", carrier));

        if T::CATEGORY != Category::Cab {
            lines.push(format!("  - 🕒 Departure: {}", or_missing(option.departure())));
            lines.push(format!("  - 🛬 Arrival: {}", or_missing(option.arrival())));
        }
        lines.push(format!("  - ⏳ Duration: {}", or_missing(option.duration())));
        lines.push(format!("  - 💰 Price: {}", display_cost(option.cost())));
    }

    if !out.is_empty() {
        out.push('\n');
    }
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
}

fn or_missing(value: Option<Cow<'_, str>>) -> Cow<'_, str> {
    value.unwrap_or(Cow::Borrowed(MISSING))
}

fn display_cost(cost: Option<&Cost>) -> String {
    match cost {
        Some(cost) => match cost.amount() {
            Some(amount) => format!("₹{}", format_amount(amount)),
            None => match &cost.0 {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => MISSING.to_string(),
                other => other.to_string(),
            },
        },
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intro_uses_long_date() {
        let request = TripRequest::parse("Delhi", "Mumbai", "2026-10-19").unwrap();
        assert_eq!(
            render_intro(&request),
            "Okay, I have found the best travel options from *Delhi* to *Mumbai* on *October 19, 2026*."
        );
    }

    #[test]
    fn test_render_sections_in_category_order() {
        let options: TravelOptions = serde_json::from_value(json!({
            "cabs": [{"cost": 8000, "duration": "9h"}],
            "flights": [{"airline": "IndiGo", "departure": "06:00", "arrival": "08:05", "duration": "2h 05m", "cost": 12000}],
            "trains": []
        }))
        .unwrap();

        let rendered = render_options(&options);
        let expected = "\
#### ✈ Flights
- *IndiGo*
  - 🕒 Departure: 06:00
  - 🛬 Arrival: 08:05
  - ⏳ Duration: 2h 05m
  - 💰 Price: ₹12000

#### 🚖 Cabs
- *Private Cab*
  - ⏳ Duration: 9h
  - 💰 Price: ₹8000
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let options: TravelOptions = serde_json::from_value(json!({
            "buses": [{"cost": "on request"}]
        }))
        .unwrap();

        let rendered = render_options(&options);
        assert!(rendered.contains("- *-*"));
        assert!(rendered.contains("Departure: -"));
        assert!(rendered.contains("Price: on request"));
    }

    #[test]
    fn test_non_string_details_render_as_json_text() {
        let options: TravelOptions = serde_json::from_value(json!({
            "trains": [{"name": 12951, "departure": "16:55", "duration": 16, "cost": "2500"}]
        }))
        .unwrap();

        let rendered = render_options(&options);
        assert!(rendered.contains("- *12951*"));
        assert!(rendered.contains("Duration: 16\n"));
        assert!(rendered.contains("Arrival: -"));
        assert!(rendered.contains("Price: 2500\n"));
    }

    #[test]
    fn test_empty_options_render_nothing() {
        assert!(render_options(&TravelOptions::default()).is_empty());
    }
}
