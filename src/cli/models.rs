//! Models command implementation

use anyhow::Result;
use clap::Args;

use crate::render;

#[derive(Args)]
pub struct ModelsArgs {
    /// Output in JSON format
    #[arg(short = 'j', long)]
    pub json: bool,
}

pub fn run(args: ModelsArgs) -> Result<()> {
    if args.json {
        println!("{}", render::render_models_json()?);
    } else {
        println!("{}", render::render_models());
    }
    Ok(())
}
