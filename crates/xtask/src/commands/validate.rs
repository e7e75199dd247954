//! Validate rotation documents
//!
//! Loads a rotation file (or a whole content directory) exactly like the
//! runtime does and reports what made it into the table.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use bot_content::{ContentFactory, LegacyLoader, LoadReport, RotationLoader};

use crate::utils;

/// Load rotation files and report skipped rows
#[derive(Parser)]
pub struct Validate {
    /// Single rotation file to check instead of a content directory
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Treat FILE as a legacy one-row-per-spec document
    #[arg(long, requires = "file")]
    legacy: bool,

    /// Content directory (defaults to the shipped sample data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Fail when any row was skipped
    #[arg(long)]
    strict: bool,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let (origin, document) = match self.file {
            Some(file) if self.legacy => {
                let document = LegacyLoader::read_document(&file)?;
                (file, document)
            }
            Some(file) => {
                let document = RotationLoader::read_document(&file)?;
                (file, document)
            }
            None => {
                let dir = utils::data_dir(self.data_dir)?;
                let document = ContentFactory::new(&dir).load_rotations()?;
                (dir, document)
            }
        };

        let (table, report) = RotationLoader::build(&document);

        println!("{} {}", style("Source:").bold().cyan(), origin.display());
        print_report(&report);
        println!();

        println!("{}", style("Specs:").bold().yellow());
        for spec in table.specs() {
            println!(
                "  {:<20} {:<18} {:<11} {} rules",
                spec.display_name,
                spec.key.to_string(),
                spec.role.label(),
                spec.rule_count()
            );
        }

        if self.strict && report.skipped > 0 {
            bail!("{} row(s) were skipped", report.skipped);
        }
        Ok(())
    }
}

fn print_report(report: &LoadReport) {
    println!("{} {}", style("Specs:").bold().cyan(), report.specs);
    println!("{} {}", style("Rules:").bold().cyan(), report.entries);
    println!(
        "{} {}",
        style("Requirements:").bold().cyan(),
        report.requirements
    );
    println!("{} {}", style("Disabled:").bold().cyan(), report.disabled);

    let skipped = if report.skipped == 0 {
        style(report.skipped.to_string()).green()
    } else {
        style(report.skipped.to_string()).red().bold()
    };
    println!("{} {}", style("Skipped:").bold().cyan(), skipped);
}
