use crate::graph::TravelMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostingError {
    #[error("speed category {0} is outside the costing table (max {max})", max = crate::costing::MAX_SPEED)]
    SpeedOutOfRange(u32),

    #[error("invalid costing configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse costing options: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("unknown travel mode `{0}`")]
    UnknownMode(String),

    #[error("no costing model is available for travel mode `{0}`")]
    UnsupportedMode(TravelMode),
}
