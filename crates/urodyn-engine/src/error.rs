use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid threshold '{name}': {value} (must be a finite, non-negative number)")]
    InvalidThreshold { name: &'static str, value: f64 },
}
