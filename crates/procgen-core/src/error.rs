use thiserror::Error;

use crate::math::Axis;

pub type Result<T> = std::result::Result<T, ProcgenError>;

#[derive(Debug, Error)]
pub enum ProcgenError {
    #[error("repetition count along {axis:?} must be at least 1")]
    ZeroAxisCount { axis: Axis },

    #[error("parameter `{name}` = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("restore symbol at position {position} has no matching save")]
    UnbalancedRestore { position: usize },

    #[error("viewport {width}x{height} has no area")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid parameter json: {0}")]
    Config(#[from] serde_json::Error),
}
