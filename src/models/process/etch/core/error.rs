use thiserror::Error;
use uom::si::f64::Time;

/// Errors from building or parsing etch measurements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EtchError {
    #[error("at least one material depth reading is required")]
    NoDepthReadings,

    #[error("at least one total step reading is required")]
    NoStepReadings,

    #[error("process time must be strictly positive: {time:?}")]
    ProcessTime { time: Time },

    #[error("reading is not a number: {token:?}")]
    InvalidReading { token: String },
}
