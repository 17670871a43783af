use clap::{Parser, ValueEnum};
use rootwalk_domain::{CliOverrides, NameLookupMode};
use std::time::Instant;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Walk the delegation chain from the root servers
    Iterative,
    /// Ask a recursive server for the NS and A records
    Recursive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LookupBackend {
    Stub,
    System,
}

impl From<LookupBackend> for NameLookupMode {
    fn from(backend: LookupBackend) -> Self {
        match backend {
            LookupBackend::Stub => NameLookupMode::Stub,
            LookupBackend::System => NameLookupMode::System,
        }
    }
}

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS resolution from the root servers down")]
struct Cli {
    /// Lookup mode
    #[arg(value_enum)]
    mode: Mode,

    /// Domain name to resolve
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Try every nameserver of a stage before giving up
    #[arg(long)]
    try_all: bool,

    /// Backend for hostname lookups
    #[arg(long, value_enum)]
    lookup: Option<LookupBackend>,

    /// Recursive server for stub lookups (ip or ip:port)
    #[arg(long, value_name = "ADDR")]
    stub_server: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        query_timeout_ms: cli.timeout_ms,
        try_all_candidates: cli.try_all.then_some(true),
        name_lookup: cli.lookup.map(NameLookupMode::from),
        stub_server: cli.stub_server.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let services = di::LookupServices::new(&config.resolver)?;

    let start = Instant::now();
    let lines = match cli.mode {
        Mode::Iterative => {
            let report = services.iterative.execute(&cli.domain).await;
            output::render_walk_report(&report)
        }
        Mode::Recursive => {
            let report = services.recursive.execute(&cli.domain).await;
            output::render_recursive_report(&report)
        }
    };

    for line in &lines {
        println!("{}", line);
    }
    println!("{}", output::render_elapsed(start.elapsed()));

    Ok(())
}
