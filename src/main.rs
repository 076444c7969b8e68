//! # Newsplit
//!
//! Newsplit turns raw Leipzig news corpora into clean per-corpus and
//! combined TSV tables, labeling every sentence with its language, year
//! and Pre-/Post-ChatGPT period, and builds coverage reports from the
//! cleaned tables.
//!
//! ## Getting started
//!
//! ```sh
//! newsplit 0.1.0
//! news corpus cleaning tool.
//!
//! USAGE:
//!     newsplit <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean     Clean raw corpora into labeled TSV tables
//!     help      Prints this message or the help of the given subcommand(s)
//!     report    Build a coverage summary from cleaned tables
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use newsplit::cli;
use newsplit::config::Config;
use newsplit::error;
use newsplit::pipelines::{CleanCorpora, CoverageReport, Pipeline};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Newsplit::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Newsplit::Clean(c) => {
            let config = Config::from_path(&c.config)?;
            let pipeline = CleanCorpora::new(config);
            pipeline.run()?;
        }
        cli::Newsplit::Report(r) => {
            let pipeline = CoverageReport::new(r.in_dir, r.report_path);
            pipeline.run()?;
        }
    };
    Ok(())
}
