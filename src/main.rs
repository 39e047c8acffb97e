use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use minihttp::client::{HttpClient, Target, transcript};
use minihttp::config::Config;
use minihttp::server;

const EXIT_RUNTIME: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "minihttp", version, about = "Single-connection HTTP/1.1 client and server")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "MINIHTTP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve files from a document root
    Serve {
        /// Port to listen on
        port: u16,
        /// Directory requests are resolved under
        document_root: PathBuf,
        /// Host name or address to bind
        #[arg(long)]
        host: Option<String>,
    },
    /// Send one request and print the response
    Fetch {
        /// host[:port][/path]
        target: String,
        /// Request method (default GET)
        method: Option<String>,
        /// Inactivity window in milliseconds that ends the response
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Write request/response transcripts under this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut cfg = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match cli.command {
        Command::Serve { port, document_root, host } => {
            cfg.server.port = port;
            cfg.server.document_root = document_root;
            if let Some(host) = host {
                cfg.server.host = host;
            }
            serve(cfg).await
        }
        Command::Fetch { target, method, timeout_ms, log_dir } => {
            let target = match Target::parse(&target, method.as_deref()) {
                Ok(target) => target,
                Err(e) => {
                    eprintln!("{}", e);
                    eprintln!("usage: minihttp fetch host[:port][/path] [METHOD]");
                    return ExitCode::from(EXIT_USAGE);
                }
            };
            if let Some(ms) = timeout_ms {
                cfg.client.read_timeout_ms = ms;
            }
            if log_dir.is_some() {
                cfg.client.transcript_dir = log_dir;
            }
            match fetch(cfg, target).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("{:#}", e);
                    ExitCode::from(EXIT_RUNTIME)
                }
            }
        }
    }
}

async fn serve(cfg: Config) -> ExitCode {
    tokio::select! {
        res = server::listener::run(&cfg.server) => {
            if let Err(e) = res {
                tracing::error!("{}", e);
                return ExitCode::from(EXIT_RUNTIME);
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    ExitCode::SUCCESS
}

async fn fetch(cfg: Config, target: Target) -> anyhow::Result<()> {
    let client = HttpClient::new(cfg.client);
    let exchange = client.request(&target).await?;

    if let Some(dir) = &client.config().transcript_dir {
        transcript::record(dir, &exchange.request, &exchange.response.raw).await?;
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&exchange.response.raw)?;
    stdout.flush()?;

    Ok(())
}
