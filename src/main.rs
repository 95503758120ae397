//! Front controller host.
//!
//! Loads configuration, sets up logging and failure reporting, builds the
//! dispatcher, then either dispatches a single URI (CGI style) or serves HTTP.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use front_controller::config::{load_config, AppConfig, ConfigError};
use front_controller::errors::{install_panic_hook, ErrorReporter, TracingReporter};
use front_controller::lifecycle::{wait_for_termination, Shutdown};
use front_controller::observability::init_logging;
use front_controller::{app, Dispatch, HttpServer};

const DEFAULT_CONFIG: &str = "front-controller.toml";

#[derive(Parser)]
#[command(name = "front-controller")]
#[command(about = "Route request URIs to controller actions", long_about = None)]
struct Cli {
    /// Configuration file. Defaults apply when the default file is absent.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a single request URI and write the handler output to stdout
    Dispatch {
        #[arg(env = "REQUEST_URI")]
        uri: Option<String>,
    },
    /// Serve HTTP, dispatching every request path
    Serve {
        /// Overrides server.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the route table in match order
    Routes,
}

fn read_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(Path::new(DEFAULT_CONFIG)),
        None => Ok(AppConfig::default()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingReporter);

    let config = match read_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            reporter.report("ConfigError", &e.to_string(), "startup");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging.level);
    install_panic_hook(reporter.clone());

    let dispatcher = app::build_dispatcher(&config);

    match cli.command {
        Commands::Dispatch { uri } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let result = dispatcher.run(uri.as_deref(), &mut out);
            let _ = out.flush();

            match result {
                Ok(Dispatch::Dispatched(target)) => {
                    tracing::debug!(handler = %target.identity, "Dispatched");
                    ExitCode::SUCCESS
                }
                Ok(Dispatch::NoMatch) => ExitCode::SUCCESS,
                Err(e) => {
                    let location = format!("dispatch {}", uri.as_deref().unwrap_or(""));
                    reporter.report_dispatch(&e, &location);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Serve { bind } => {
            let bind_address = bind.unwrap_or_else(|| config.server.bind_address.clone());
            let listener = match TcpListener::bind(&bind_address).await {
                Ok(listener) => listener,
                Err(e) => {
                    reporter.report("BindError", &e.to_string(), &bind_address);
                    return ExitCode::FAILURE;
                }
            };

            let shutdown = Shutdown::new();
            let server_shutdown = shutdown.subscribe();
            tokio::spawn(wait_for_termination(shutdown.clone()));

            let server = HttpServer::new(&config.server, dispatcher, reporter.clone());
            if let Err(e) = server.run(listener, server_shutdown).await {
                reporter.report("ServerError", &e.to_string(), &bind_address);
                return ExitCode::FAILURE;
            }

            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Commands::Routes => {
            for (i, entry) in dispatcher.routes().iter().enumerate() {
                let template = if entry.template.is_empty() { "(request path)" } else { entry.template.as_str() };
                println!("{i:>3}  {:<32} -> {template}", format!("~{}~", entry.pattern));
            }
            ExitCode::SUCCESS
        }
    }
}
