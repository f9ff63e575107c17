//! CLI entry point for the `socnet` interactive social network tool.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use social_graph::cli::Menu;
use social_graph::types::{CliConfig, CliOverrides, NetworkResult, OutputFormat};
use social_graph::SocialGraph;

#[derive(Parser)]
#[command(
    name = "socnet",
    version,
    about = "Social network analysis: connections, mutual friends, suggestions and shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Ignore repeated connections between the same two people
    #[arg(long)]
    dedup_connections: bool,

    /// Do not print the welcome banner
    #[arg(long)]
    quiet_banner: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format.clone(),
            dedup_connections: self.dedup_connections,
            quiet_banner: self.quiet_banner,
        }
    }
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " *** Social Network Analysis v{} ***", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, " FIRST ADD SOME PEOPLE AND THEN GO FOR REMAINING OPTIONS")?;
    Ok(())
}

fn run(config: CliConfig) -> NetworkResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.show_banner && config.format == OutputFormat::Text {
        print_banner(&mut out)?;
    }

    let graph = SocialGraph::with_config(config.graph);
    let mut menu = Menu::new(graph, stdin.lock(), out, config.format);
    menu.run()?;

    let graph = menu.into_graph();
    log::info!(
        "session ended with {} people and {} connections",
        graph.person_count(),
        graph.connection_count()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = CliConfig::resolve(cli.config.as_deref(), &cli.overrides()).and_then(run);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
