//! Print a spec's rotation as the runtime sees it

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use bot_core::ClassId;
use bot_runtime::{BotRuntime, FileRotationSource};

use crate::utils;

/// Print the rotation table of one class/spec
#[derive(Parser)]
pub struct Describe {
    /// Class id (e.g. 2 for Paladin, 9 for Warlock)
    #[arg(value_name = "CLASS")]
    class: u8,

    /// Talent tree index (0, 1 or 2)
    #[arg(value_name = "SPEC")]
    spec: u8,

    /// Content directory (defaults to the shipped sample data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Describe {
    pub fn execute(self) -> Result<()> {
        let dir = utils::data_dir(self.data_dir)?;
        let runtime = BotRuntime::builder()
            .source(FileRotationSource::data_dir(&dir))
            .build()?;

        let text = runtime.describe_rotation(ClassId(self.class), self.spec)?;
        let mut lines = text.lines();
        if let Some(header) = lines.next() {
            println!("{}", style(header).bold().green());
        }
        for line in lines {
            if line.starts_with('[') {
                println!("{}", style(line).bold().yellow());
            } else {
                println!("{line}");
            }
        }
        Ok(())
    }
}
