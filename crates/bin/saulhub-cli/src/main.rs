//! # saulhub-cli
//!
//! Composition root that wires the in-memory registry to the router,
//! plus a line-oriented debugging console. Real transports (and their
//! framing) live outside this workspace; this binary stands in for one
//! by reading one request per stdin line and printing the response:
//!
//! ```text
//! GET /temp
//! GET /sensor class=130
//! POST /saul/dev 2
//! ```
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::{self, BufRead, Write};

use saulhub_adapter_registry_mem::MemoryRegistry;
use saulhub_app::router::Router;
use saulhub_domain::message::{Method, Request, Response};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with_writer(io::stderr)
        .init();

    let registry = MemoryRegistry::new();
    for seed in &config.devices {
        let position = registry.register(seed.class, &seed.name, seed.device())?;
        tracing::info!(position, name = %seed.name, class = %seed.class, "registered virtual device");
    }

    let capacity = config.reply.capacity;
    let router = Router::new(registry);
    let as_json = std::env::args().any(|arg| arg == "--json");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line, capacity) {
            Ok(request) => {
                let response = router.dispatch(&request);
                if as_json {
                    writeln!(out, "{}", serde_json::to_string(&response)?)?;
                } else {
                    writeln!(out, "{}", render_response(&response))?;
                }
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }

    Ok(())
}

/// Format a response for the plain-text console, marking at a glance
/// whether the exchange succeeded.
fn render_response(response: &Response) -> String {
    let outcome = if response.status.is_success() {
        "ok"
    } else {
        "err"
    };
    format!(
        "{outcome} {:?} {}",
        response.status,
        response.payload_str().unwrap_or("<non-utf8 payload>")
    )
}

/// Errors for request lines this console cannot interpret.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum LineError {
    /// The first token is not a known method.
    #[error("unknown method {0:?}, expected GET or POST")]
    UnknownMethod(String),
    /// No path token followed the method.
    #[error("missing resource path")]
    MissingPath,
}

/// Parse one console line into a request.
///
/// Syntax: `METHOD PATH [ARG]`. A query may ride along as `PATH?QUERY`
/// or as the trailing argument of a GET; the trailing argument of a
/// POST is the request payload.
fn parse_line(line: &str, capacity: usize) -> Result<Request, LineError> {
    let mut tokens = line.split_whitespace();
    let method = match tokens.next() {
        Some(token) if token.eq_ignore_ascii_case("get") => Method::Get,
        Some(token) if token.eq_ignore_ascii_case("post") => Method::Post,
        Some(token) => return Err(LineError::UnknownMethod(token.to_string())),
        None => return Err(LineError::MissingPath),
    };
    let raw_path = tokens.next().ok_or(LineError::MissingPath)?;
    let (path, query) = match raw_path.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (raw_path, None),
    };

    let mut request = Request {
        path: path.to_string(),
        method,
        payload: Vec::new(),
        query,
        capacity,
    };
    match (method, tokens.next()) {
        (Method::Get, Some(arg)) if request.query.is_none() => {
            request.query = Some(arg.to_string());
        }
        (Method::Post, Some(arg)) => {
            request.payload = arg.as_bytes().to_vec();
        }
        _ => {}
    }
    Ok(request)
}
