//! Count command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_config;
use crate::estimate::estimate_tokens;
use crate::input::read_text_file;
use crate::pricing::{estimate_cost, Model, Period};
use crate::render;

#[derive(Args)]
pub struct CountArgs {
    /// Text to count tokens for
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// File to count tokens for
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Model to estimate costs for
    #[arg(short = 'm', long, value_name = "MODEL", env = "TOKCAST_MODEL")]
    pub model: Option<Model>,

    /// Time period for pricing (standard: UTC 00:30-16:30, discount: UTC 16:30-00:30)
    #[arg(short = 't', long, value_name = "PERIOD", env = "TOKCAST_TIME")]
    pub time: Option<Period>,

    /// Output in JSON format
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Path to config file (tokcast.toml or .tokcast.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: CountArgs) -> Result<()> {
    if args.text.is_some() && args.file.is_some() {
        anyhow::bail!("Cannot specify both TEXT and --file");
    }

    let cwd = std::env::current_dir()?;
    let cfg = load_config(&cwd, args.config.as_deref())?;

    // CLI and environment beat the config file, which beats defaults.
    let model = args.model.or(cfg.model).unwrap_or_default();
    let time = args.time.or(cfg.time).unwrap_or_default();

    let text = if let Some(path) = args.file.as_deref() {
        read_text_file(path)?
    } else if let Some(text) = args.text {
        text
    } else {
        anyhow::bail!("Either TEXT or --file must be specified");
    };

    let token_count = estimate_tokens(&text);
    let report = estimate_cost(token_count, model, time);

    if args.json {
        println!("{}", render::render_report_json(&report)?);
    } else {
        println!("{}", render::render_report(&report));
    }

    Ok(())
}
