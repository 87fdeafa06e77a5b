use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid style settings: {0}")]
    InvalidStyle(String),

    #[error("unknown category `{0}` in current scene")]
    UnknownCategory(String),

    #[error("host service failure: {0}")]
    HostService(String),
}
