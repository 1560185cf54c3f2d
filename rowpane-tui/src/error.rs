use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] rowpane_core::ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("usage: rowpane-tui [--config <viewer.json>] <data.json>")]
    Usage,
}
