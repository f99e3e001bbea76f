//! Static DeepSeek rate table
//!
//! Published list prices in USD per million tokens. Every supported
//! model and billing period resolves to a rate triple at compile time;
//! there is no fallback row and no runtime mutation.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The DeepSeek API models this tool prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Model {
    /// General-purpose chat model.
    #[default]
    #[value(name = "deepseek-chat")]
    #[serde(rename = "deepseek-chat")]
    Chat,
    /// Reasoning model.
    #[value(name = "deepseek-reasoner")]
    #[serde(rename = "deepseek-reasoner")]
    Reasoner,
}

/// Billing period. Discount pricing applies UTC 16:30-00:30, standard
/// pricing the rest of the day. The period is always chosen by the
/// caller; nothing in this crate consults a clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Standard,
    Discount,
}

/// Errors from parsing model or period names out of strings. The rate
/// table itself cannot fail: lookups take the enums, not strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown model '{name}', expected 'deepseek-chat' or 'deepseek-reasoner'")]
    UnknownModel { name: String },

    #[error("unknown time period '{name}', expected 'standard' or 'discount'")]
    UnknownPeriod { name: String },
}

impl Model {
    /// Every supported model, in display order.
    pub const ALL: [Model; 2] = [Model::Chat, Model::Reasoner];

    /// Canonical API identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Chat => "deepseek-chat",
            Model::Reasoner => "deepseek-reasoner",
        }
    }
}

impl Period {
    /// Every billing period, in display order.
    pub const ALL: [Period; 2] = [Period::Standard, Period::Discount];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Standard => "standard",
            Period::Discount => "discount",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deepseek-chat" => Ok(Model::Chat),
            "deepseek-reasoner" => Ok(Model::Reasoner),
            other => Err(PricingError::UnknownModel {
                name: other.to_string(),
            }),
        }
    }
}

impl FromStr for Period {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Period::Standard),
            "discount" => Ok(Period::Discount),
            other => Err(PricingError::UnknownPeriod {
                name: other.to_string(),
            }),
        }
    }
}

/// List prices for one model and period, in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    /// Input tokens served from the prompt cache.
    pub input_cache_hit: f64,
    /// Input tokens missing the prompt cache.
    pub input_cache_miss: f64,
    /// Output tokens.
    pub output: f64,
}

/// Look up the rate triple for a model and billing period.
///
/// The match is exhaustive over both enums, so every representable
/// combination carries a price and unknown keys cannot occur.
pub const fn rates(model: Model, period: Period) -> Rates {
    match (model, period) {
        (Model::Chat, Period::Standard) => Rates {
            input_cache_hit: 0.07,
            input_cache_miss: 0.27,
            output: 1.10,
        },
        (Model::Chat, Period::Discount) => Rates {
            input_cache_hit: 0.035,
            input_cache_miss: 0.135,
            output: 0.550,
        },
        (Model::Reasoner, Period::Standard) => Rates {
            input_cache_hit: 0.14,
            input_cache_miss: 0.55,
            output: 2.19,
        },
        (Model::Reasoner, Period::Discount) => Rates {
            input_cache_hit: 0.035,
            input_cache_miss: 0.135,
            output: 0.550,
        },
    }
}
