use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart rotation: {0} degrees (expected 0, 90, -90 or 180)")]
    InvalidRotation(i32),

    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
