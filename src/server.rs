use std::net::{AddrParseError, SocketAddr};

use axum::Router;
use clap::Parser;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::app::{App, shell};
use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "narratus", about = "Serve the narratus navigation shell")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overrides the Leptos site address
    #[arg(long, env = "NARRATUS_BIND")]
    pub bind: Option<String>,
    /// Log output format
    #[arg(long, env = "NARRATUS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Configuration(String),
    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServerConfig {
    /// `--bind` when given, otherwise the address from the Leptos config.
    pub fn resolve_addr(&self, site_addr: SocketAddr) -> Result<SocketAddr, ServerError> {
        match self.bind.as_deref() {
            Some(value) => value.parse().map_err(|source| ServerError::InvalidBind {
                value: value.to_string(),
                source,
            }),
            None => Ok(site_addr),
        }
    }
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options)
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let conf =
        get_configuration(None).map_err(|err| ServerError::Configuration(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config.resolve_addr(leptos_options.site_addr)?;

    let app = router(leptos_options);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(?err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => tracing::warn!(?err, "failed to listen for TERM signal"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
