use crate::config::Config;
use crate::router::handle;
use astra::{Request, Server};
use std::time::Instant;
use tracing as log;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging
    tracing_subscriber::fmt()
        .compact()
        .with_thread_names(true)
        .with_max_level(config.log_level)
        .init();

    // 3️⃣ Start the server
    let addr = config.addr;
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing config into closure
    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &config) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    log::error!(%method, %path, "request failed: {err}");
                } else {
                    log::warn!(%method, %path, "request rejected: {err}");
                }
                templates::html_error_response(err)
            }
        };

        log::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "served"
        );
        resp
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
