use anyhow::{Context, Result};
use clap::Parser;
use conf2yaml::inspect::render_tree;
use ios_conf_core::parse_file;

mod cli;
mod convert;
mod scan_cmd;

use cli::{Cli, Command, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Scan(args) => scan_cmd::run_scan(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let tree = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    match args.format {
        OutputFormat::Text => print!("{}", render_tree(&tree, args.depth)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(())
}
