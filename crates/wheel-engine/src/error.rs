use thiserror::Error;

/// Failure while collecting the wheel's candidate items.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("item request failed: {0}")]
    Transport(String),

    #[error("item source answered with HTTP {0}")]
    Status(u16),

    #[error("malformed item response")]
    Json(#[from] serde_json::Error),

    #[error("invalid candidate set: {0}")]
    InvalidSet(String),
}

/// Why a spin request or settle step was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    #[error("candidates are still loading")]
    NotReady,

    #[error("a spin is already in flight")]
    InFlight,

    #[error("no spin is in flight")]
    NotSpinning,

    #[error("spin delta {delta} outside [{min}, {max}]")]
    DeltaOutOfRange { delta: u32, min: u32, max: u32 },
}

impl SpinError {
    /// Numeric code forwarded to the host in event payloads.
    pub fn code(self) -> u32 {
        match self {
            SpinError::NotReady => 1,
            SpinError::InFlight => 2,
            SpinError::NotSpinning => 3,
            SpinError::DeltaOutOfRange { .. } => 4,
        }
    }
}
