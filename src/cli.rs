//! CLI argument parsing and outcome handling

use anyhow::Result;
use clap::Parser;

use repo_picker::pipeline::{self, Outcome};

/// Pick a repository from your GitHub organizations and make sure it is cloned
#[derive(Parser, Debug)]
#[command(name = "repo-picker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .init();

        match pipeline::run()? {
            Outcome::Resolved(path) => println!("{}", path.display()),
            Outcome::NothingSelected => println!("nothing selected"),
            // Unmatched selections exit silently; see pipeline::Outcome
            Outcome::NoMatch => {}
        }
        Ok(())
    }
}
