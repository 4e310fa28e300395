use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use bgp_facts::{Config, FactCollector, FactModel, FactsError, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "bgp-facts")]
#[command(version)]
#[command(about = "Collect BGP neighbor facts from the routing daemon")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the daemon through vtysh and print the facts
    Collect {
        /// Path to config file
        #[arg(short, long)]
        config: Option<String>,

        /// vtysh binary, overrides the config file
        #[arg(long)]
        vtysh: Option<String>,

        /// Namespace/ASIC instance, overrides the config file
        #[arg(short = 'n', long)]
        instance: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Parse saved report files and print the facts
    Parse {
        /// Output of `show ip bgp summary`
        #[arg(long)]
        summary: String,

        /// Output of `show ip bgp neighbors`
        #[arg(long)]
        neighbors: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Wrap the facts in an `ansible_facts` object
    #[arg(long)]
    ansible: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Collect {
            config,
            vtysh,
            instance,
            output,
        } => collect(config.as_deref(), vtysh, instance).and_then(|facts| print_facts(&facts, &output)),
        Commands::Parse {
            summary,
            neighbors,
            output,
        } => parse_files(&summary, &neighbors).and_then(|facts| print_facts(&facts, &output)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, FactsError> {
    match path {
        Some(path) => Config::from_file(path)
            .map_err(|e| FactsError::Config(format!("failed to load {}: {}", path, e))),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!("Using config {}", DEFAULT_CONFIG_PATH);
            Config::from_file(DEFAULT_CONFIG_PATH)
                .map_err(|e| FactsError::Config(format!("failed to load {}: {}", DEFAULT_CONFIG_PATH, e)))
        }
        None => Ok(Config::default()),
    }
}

fn collect(
    config_path: Option<&str>,
    vtysh: Option<String>,
    instance: Option<u32>,
) -> Result<FactModel, FactsError> {
    let mut config = load_config(config_path)?;

    // CLI flags override config values
    if let Some(vtysh) = vtysh {
        config.vtysh = vtysh;
    }
    if instance.is_some() {
        config.instance = instance;
    }

    collect_async(&config)
}

#[tokio::main]
async fn collect_async(config: &Config) -> Result<FactModel, FactsError> {
    FactCollector::from_config(config).collect().await
}

fn parse_files(summary_path: &str, neighbors_path: &str) -> Result<FactModel, FactsError> {
    let summary = fs::read_to_string(summary_path)?;
    let neighbors = fs::read_to_string(neighbors_path)?;
    Ok(FactModel::parse(&summary, &neighbors)?)
}

fn print_facts(facts: &FactModel, output: &OutputArgs) -> Result<(), FactsError> {
    let json = match (output.ansible, output.pretty) {
        (true, true) => facts
            .to_ansible_value()
            .and_then(|value| serde_json::to_string_pretty(&value)),
        (true, false) => facts
            .to_ansible_value()
            .and_then(|value| serde_json::to_string(&value)),
        (false, true) => facts.to_json_pretty(),
        (false, false) => facts.to_json(),
    }
    .map_err(|e| FactsError::Io(e.into()))?;

    println!("{}", json);
    Ok(())
}
