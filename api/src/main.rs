use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state, with_metrics};
use crate::args::{Args, LogArgs, LogFormat};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log.format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    let app = with_metrics(router(state)?, &args.server.root_path);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("NutriLens API listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
