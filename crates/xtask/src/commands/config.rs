//! Print the effective bot configuration

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use bot_content::{ConfigLoader, ContentFactory};

use crate::utils;

/// Print the effective bot configuration
#[derive(Parser)]
pub struct Config {
    /// Content directory (defaults to the shipped sample data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Ignore BOT_* environment overrides
    #[arg(long)]
    no_env: bool,
}

impl Config {
    pub fn execute(self) -> Result<()> {
        let dir = utils::data_dir(self.data_dir)?;
        let path = ContentFactory::new(&dir).config_path();

        let config = if self.no_env {
            ConfigLoader::load(&path)?
        } else {
            ConfigLoader::load_with_env(&path)?
        };

        println!("{} {}", style("Config File:").bold().cyan(), path.display());
        println!(
            "{} {}",
            style("Env Overrides:").bold().cyan(),
            if self.no_env { "ignored" } else { "applied" }
        );
        println!();

        let rendered =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{rendered}");
        Ok(())
    }
}
