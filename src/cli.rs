//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "newsplit", about = "news corpus cleaning tool.")]
/// Holds every command that is callable by the `newsplit` command.
pub enum Newsplit {
    #[structopt(about = "Clean raw corpora into labeled TSV tables")]
    Clean(Clean),
    #[structopt(about = "Build a coverage summary from cleaned tables")]
    Report(Report),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(
        parse(from_os_str),
        long = "config",
        help = "path to the TOML run configuration",
        default_value = "config/newsplit.toml"
    )]
    pub config: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Report command and parameters.
pub struct Report {
    #[structopt(
        parse(from_os_str),
        help = "clean TSV directory",
        default_value = "data/clean"
    )]
    pub in_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "output Markdown path",
        default_value = "reports/coverage.md"
    )]
    pub report_path: PathBuf,
}
