//! Output rendering
//!
//! Human-readable text and pretty-printed JSON for cost reports and the
//! rate table listing. Rendering never changes the numbers: USD amounts
//! are formatted with six decimal places, list prices with three.

use anyhow::Result;
use serde::Serialize;

use crate::pricing::{rates, CostReport, Model, Period, Rates};

/// Render a cost report as the human-readable text block.
///
/// The text starts with a blank line and carries no trailing newline;
/// callers print it with `println!`.
pub fn render_report(report: &CostReport) -> String {
    let costs = &report.costs;
    let lines = vec![
        String::new(),
        format!("Token Count Estimate: {}", report.token_count),
        format!("Model: {}", report.model),
        format!("Time Period: {}", report.time_period),
        String::new(),
        "Estimated Costs (USD):".to_string(),
        format!("  Input (Cache Hit): ${:.6}", costs.input_cache_hit),
        format!("  Input (Cache Miss): ${:.6}", costs.input_cache_miss),
        format!("  Output (Same Length): ${:.6}", costs.output_same_length),
        String::new(),
        "Total Costs:".to_string(),
        format!("  With Cache Hit: ${:.6}", costs.total_cache_hit),
        format!("  With Cache Miss: ${:.6}", costs.total_cache_miss),
    ];
    lines.join("\n")
}

/// Render a cost report as pretty-printed JSON.
pub fn render_report_json(report: &CostReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row of the rate table listing.
#[derive(Debug, Serialize)]
struct ModelListing {
    model: Model,
    standard: Rates,
    discount: Rates,
}

fn listings() -> Vec<ModelListing> {
    Model::ALL
        .into_iter()
        .map(|model| ModelListing {
            model,
            standard: rates(model, Period::Standard),
            discount: rates(model, Period::Discount),
        })
        .collect()
}

/// Render the full rate table as human-readable text.
pub fn render_models() -> String {
    let mut lines = vec!["Available models (USD per 1M tokens):".to_string()];
    for model in Model::ALL {
        lines.push(String::new());
        lines.push(model.to_string());
        for period in Period::ALL {
            let r = rates(model, period);
            lines.push(format!(
                "  {period}: cache hit ${:.3}, cache miss ${:.3}, output ${:.3}",
                r.input_cache_hit, r.input_cache_miss, r.output
            ));
        }
    }
    lines.push(String::new());
    lines.push("Discount pricing applies UTC 16:30-00:30, standard pricing otherwise.".to_string());

    lines.join("\n")
}

/// Render the full rate table as pretty-printed JSON.
pub fn render_models_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&listings())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::estimate_cost;
    use similar_asserts::assert_eq;

    #[test]
    fn report_text_matches_expected_layout() {
        let report = estimate_cost(1_000_000, Model::Chat, Period::Standard);
        let expected = [
            "",
            "Token Count Estimate: 1000000",
            "Model: deepseek-chat",
            "Time Period: standard",
            "",
            "Estimated Costs (USD):",
            "  Input (Cache Hit): $0.070000",
            "  Input (Cache Miss): $0.270000",
            "  Output (Same Length): $1.100000",
            "",
            "Total Costs:",
            "  With Cache Hit: $1.170000",
            "  With Cache Miss: $1.370000",
        ]
        .join("\n");
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn zero_token_report_renders_all_zero_amounts() {
        let report = estimate_cost(0, Model::Reasoner, Period::Discount);
        let text = render_report(&report);
        assert!(text.contains("Token Count Estimate: 0"));
        assert!(text.contains("Model: deepseek-reasoner"));
        assert!(text.contains("Time Period: discount"));
        assert_eq!(text.matches("$0.000000").count(), 5);
    }

    #[test]
    fn report_json_is_pretty_printed_and_complete() {
        let report = estimate_cost(500, Model::Chat, Period::Standard);
        let json = render_report_json(&report).unwrap();
        assert!(json.starts_with("{\n"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["token_count"], 500);
        assert_eq!(value["model"], "deepseek-chat");
        assert_eq!(value["time_period"], "standard");
        for key in [
            "input_cache_hit",
            "input_cache_miss",
            "output_same_length",
            "total_cache_hit",
            "total_cache_miss",
        ] {
            assert!(value["costs"][key].is_number(), "missing costs.{key}");
        }
    }

    #[test]
    fn models_text_lists_every_model_and_period() {
        let expected = [
            "Available models (USD per 1M tokens):",
            "",
            "deepseek-chat",
            "  standard: cache hit $0.070, cache miss $0.270, output $1.100",
            "  discount: cache hit $0.035, cache miss $0.135, output $0.550",
            "",
            "deepseek-reasoner",
            "  standard: cache hit $0.140, cache miss $0.550, output $2.190",
            "  discount: cache hit $0.035, cache miss $0.135, output $0.550",
            "",
            "Discount pricing applies UTC 16:30-00:30, standard pricing otherwise.",
        ]
        .join("\n");
        assert_eq!(render_models(), expected);
    }

    #[test]
    fn models_json_covers_both_models() {
        let json = render_models_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["model"], "deepseek-chat");
        assert_eq!(rows[1]["model"], "deepseek-reasoner");
        assert_eq!(rows[0]["standard"]["input_cache_hit"], 0.07);
        assert_eq!(rows[1]["discount"]["output"], 0.55);
    }
}
