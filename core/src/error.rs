use thiserror::Error;

/// Rejected match configurations. The simulation itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas must be larger than zero, got {width}x{height}")]
    EmptyCanvas { width: f64, height: f64 },
    #[error("player size must be positive, got {0}")]
    PlayerSize(f64),
    #[error("max speed must be positive, got {0}")]
    MaxSpeed(f64),
    #[error("platform {index} has negative dimensions {width}x{height}")]
    PlatformSize { index: usize, width: f64, height: f64 },
    #[error("friction {0} must be between 0.0 and 1.0")]
    Friction(f64),
    #[error("gravity {0} must not be negative")]
    Gravity(f64),
}
