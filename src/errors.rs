use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("padding error: {0}")]
    Padding(#[from] crate::padding::PaddingError),
    #[error("affix error: {0}")]
    Affix(#[from] crate::affixes::AffixError),
    #[error("output error: {0}")]
    Output(#[from] crate::writer::OutputError),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl AppError {
    /// Process exit status: 2 for usage mistakes, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(e) if e.is_usage() => 2,
            _ => 1,
        }
    }
}
