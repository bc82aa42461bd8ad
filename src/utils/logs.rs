use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.as_str()).unwrap_or(Level::INFO)
}

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout carries the rendered catalog, keep diagnostics apart.
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
