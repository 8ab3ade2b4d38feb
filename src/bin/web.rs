use clap::Parser;
use disk_scheduler::logging::{init_subscriber, Verbosity};
use disk_scheduler::web::{router, AppState};
use disk_scheduler::ServerConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "web")]
#[command(about = "Disk scheduling simulator over HTTP")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file
    #[arg(long)]
    addr: Option<String>,

    /// Runtime worker threads, overrides the config file
    #[arg(long)]
    workers: Option<usize>,

    /// Disable the /metrics endpoint
    #[arg(long)]
    no_metrics: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Errors only
    #[arg(short, long)]
    quiet: bool,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_subscriber(Verbosity::from_flags(args.verbose, args.quiet), args.no_color)?;

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(addr) = args.addr {
        config = config.with_bind_addr(addr);
    }
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if args.no_metrics {
        config = config.with_metrics(false);
    }
    config.validate()?;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?
        .block_on(serve(config))
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        workers = config.workers,
        metrics = config.enable_metrics,
        "disk-scheduler v{} listening",
        env!("CARGO_PKG_VERSION")
    );

    let app = router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
