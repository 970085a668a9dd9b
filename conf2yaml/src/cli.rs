use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "conf2yaml")]
#[command(about = "Extract Cisco switch configurations into YAML documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert a directory tree of configs into mirrored YAML documents.
    Convert(ConvertArgs),
    /// Show the parsed structure of a single config file.
    Inspect(InspectArgs),
    /// Scan one config and report which stanzas extraction would find.
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Directory of config files to convert (default: configurations).
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Directory to write YAML documents into (default: yaml).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Domain suffix for output file names (default: ocls.info).
    #[arg(long)]
    pub domain: Option<String>,
    /// Echo each rendered YAML document to stdout.
    #[arg(long)]
    pub debug: bool,
    /// Optional settings TOML file. Defaults to conf2yaml.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Config file to inspect.
    pub file: PathBuf,
    #[arg(long, default_value_t = 3)]
    pub depth: usize,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Config file to scan.
    pub file: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
