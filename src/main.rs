use crate::config::Config;
use crate::router::respond;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod mot;
mod responses;
mod router;
mod templates;
mod valuation;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging, RUST_LOG wins over the default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mot_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Config from env / .env
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing config into closure
    let result = server.serve(move |req, _info| respond(req, &cfg));

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
