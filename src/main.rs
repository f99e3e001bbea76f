//! tokcast: estimate DeepSeek token counts and API costs
//!
//! Counts tokens with a lexical heuristic and prices them against the
//! published DeepSeek rate table, without calling the API.

use anyhow::Result;

fn main() -> Result<()> {
    tokcast::cli::run()
}
