use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use automininet::config_loader;
use automininet::orchestrator::Conversion;
use automininet::utils::prompt::{ask, parse_flag};

/// Convert a GraphML network topology into a Mininet topology script
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the GraphML topology file (asked interactively if omitted)
    input: Option<PathBuf>,

    /// Attach one host to every switch: 1 or 0 (asked interactively if omitted)
    #[arg(long, value_parser = parse_host_flag)]
    hosts: Option<bool>,

    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the generated `<name>_mininet.py`
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn parse_host_flag(value: &str) -> Result<bool, String> {
    parse_flag(value).map_err(|e| format!("expected an integer such as 1 or 0: {}", e))
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = config_loader::load_or_default(args.config.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let graphml = match args.input {
        Some(path) => path,
        None => PathBuf::from(ask(&mut input, &mut output, "graphml file: ")?),
    };
    let hosts = match args.hosts.or(config.hosts) {
        Some(hosts) => hosts,
        None => {
            let answer = ask(&mut input, &mut output, "Add hosts?(1, 0): ")?;
            parse_flag(&answer).wrap_err_with(|| format!("Invalid answer '{}', expected 1 or 0", answer))?
        }
    };

    let mut conversion = Conversion::new(graphml, hosts);
    conversion.output_dir = args
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    conversion.config = config;

    let output_path = conversion.run()?;
    info!("Run it with: sudo mn --custom {} --topo {}", output_path.display(), conversion.topology_name()?);
    Ok(())
}
