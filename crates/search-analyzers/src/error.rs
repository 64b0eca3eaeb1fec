use search_containers::ContainerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The URI was not part of the corpus the analyzer was built from.
    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Container(#[from] ContainerError),
}
