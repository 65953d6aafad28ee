use pc_server::{AppState, Cli, Command, build_router, logger};

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let config = pc_config::Config::load()?;
    config.validate()?;

    match cli.command() {
        Command::Audit { compact } => {
            let report = pc_server::audit::run(&config, compact, &mut std::io::stdout().lock())?;
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Serve => {
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: pc_config::Config) -> pc_server::ServerResult<()> {
    // Logger first so key generation warnings are captured
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config.server.cors_allowed_origins);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| pc_server::ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    match listener.local_addr() {
        Ok(addr) => info!("Server listening on {}", addr),
        Err(_) => info!("Server listening on {}", bind_addr),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| pc_server::ServerError::Serve { source })?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
