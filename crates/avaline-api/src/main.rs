//! Avaline REST API entry point.
//!
//! Binary name: `avaline`
//!
//! Parses CLI arguments, initializes configuration and services (failing
//! fast on a missing persona or completion API key), then serves the REST
//! API until Ctrl+C or SIGTERM.

mod http;
mod state;

use clap::Parser;

use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "avaline", about = "Virtual companion chat server", version)]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Host interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable OpenTelemetry stdout span export.
    #[arg(long)]
    otel: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    avaline_observe::tracing_setup::init_tracing(cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Initialize application state (config, persona, API keys, services).
    let state = AppState::init().await?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Avaline listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!(
        "  {} Data directory: {}",
        console::style("📁").bold(),
        console::style(state.data_dir.display().to_string()).dim()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    avaline_observe::tracing_setup::shutdown_tracing();
    println!("\n  Server stopped.");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
