// src/main.rs

use std::io;
use std::process::ExitCode;

use input_sanitizer::cli;
use input_sanitizer::config::Config;
use input_sanitizer::utils::html::Sanitizer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load configuration from environment (.env first, if present)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr, stdout carries the sanitized output
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stderr());
    let env_filter = EnvFilter::new(&config.rust_log);
    let stderr_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    let result = Sanitizer::new(config.sanitize.clone()).and_then(|sanitizer| {
        tracing::debug!(options = ?sanitizer.options(), "Sanitizer ready");
        let args: Vec<String> = std::env::args().skip(1).collect();
        cli::run(&sanitizer, &args, io::stdin().lock(), io::stdout().lock())
    });

    if let Err(e) = &result {
        tracing::error!("{}", e);
        eprintln!("{}", e);
    }

    ExitCode::from(cli::exit_status(&result))
}
