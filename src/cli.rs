use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "readme-licenses",
    about = "Regenerate the third-party library list in README files",
    version
)]
pub struct Cli {
    /// Project root; manifest and document paths are resolved against it
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// AboutLibraries JSON manifest [default: app/src/main/res/raw/aboutlibraries.json]
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Config file [default: ./.readme-licenses/config.toml, fallback ~/.config/readme-licenses/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not write; exit with 1 if any document is out of date
    #[arg(long)]
    pub check: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Also list every resolved library
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors and a summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
