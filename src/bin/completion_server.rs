//! REST Completion Language Server Binary Entry Point
//!
//! Serves completions for `.http` and `.rest` files over the Language Server
//! Protocol, using tower-lsp on a tokio runtime.
//!
//! # Communication
//!
//! The server communicates via stdin/stdout using the JSON-RPC protocol.
//! All logging goes to stderr to avoid interfering with the protocol. Set
//! `RUST_LOG` (for example `RUST_LOG=rest_completion=debug`) to change the
//! log level; the default is `info`.

use rest_completion::lsp_server::backend::Backend;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // stdout is reserved for the protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!(
        "Starting REST completion server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| {
        log::debug!("Initializing backend with client connection");
        Backend::new(client)
    });

    log::info!("Server ready, listening on stdin/stdout");

    let server = Server::new(stdin, stdout, socket);

    tokio::select! {
        _ = server.serve(service) => {
            log::info!("Server finished");
        }
        _ = shutdown_signal() => {
            log::info!("Received shutdown signal");
        }
    }

    log::info!("Server shutting down gracefully");
}

/// Wait for a shutdown signal (SIGINT or SIGTERM on Unix, Ctrl+C on Windows)
///
/// If no handler can be installed, this never resolves and the server runs
/// until its input closes.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut sigint, mut sigterm) = match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Failed to install signal handlers: {}", e);
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigint.recv() => log::debug!("Received SIGINT"),
            _ = sigterm.recv() => log::debug!("Received SIGTERM"),
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
