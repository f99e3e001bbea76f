//! Cost estimation against the DeepSeek rate table
//!
//! Turns a token count into USD amounts for both input scenarios (prompt
//! cache hit and miss) plus a hypothetical output of the same length.
//! Pricing is a pure computation over [`table::rates`]; nothing here does
//! I/O or consults a clock.

pub mod table;

pub use table::{rates, Model, Period, PricingError, Rates};

use serde::Serialize;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Estimated USD amounts for a single hypothetical request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Input cost if every token hits the prompt cache.
    pub input_cache_hit: f64,
    /// Input cost if every token misses the prompt cache.
    pub input_cache_miss: f64,
    /// Output cost for a response as long as the input.
    pub output_same_length: f64,
    /// Cache-hit input plus output.
    pub total_cache_hit: f64,
    /// Cache-miss input plus output.
    pub total_cache_miss: f64,
}

/// A priced token estimate, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    pub token_count: u64,
    pub model: Model,
    pub time_period: Period,
    pub costs: CostBreakdown,
}

/// Price `token_count` tokens under the given model and billing period.
///
/// Rates are quoted per million tokens, so each amount is the rate times
/// `token_count / 1_000_000`. The totals pair one input scenario with the
/// same-length output. Zero tokens price to zero across the board.
pub fn estimate_cost(token_count: u64, model: Model, time_period: Period) -> CostReport {
    let r = table::rates(model, time_period);
    let millions = token_count as f64 / TOKENS_PER_MILLION;

    let costs = CostBreakdown {
        input_cache_hit: r.input_cache_hit * millions,
        input_cache_miss: r.input_cache_miss * millions,
        output_same_length: r.output * millions,
        total_cache_hit: (r.input_cache_hit + r.output) * millions,
        total_cache_miss: (r.input_cache_miss + r.output) * millions,
    };

    CostReport {
        token_count,
        model,
        time_period,
        costs,
    }
}
