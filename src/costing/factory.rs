use crate::costing::{AutoCost, AutoCostConfig, DynamicCost};
use crate::error::CostingError;
use crate::graph::TravelMode;

use log::{debug, warn};
use std::str::FromStr;
use std::sync::Arc;

/// A costing model which may be shared across concurrent searches.
pub type SharedCost = Arc<dyn DynamicCost + Send + Sync>;

/// Creates the costing model for `mode`.
///
/// Only motor vehicle ([`TravelMode::Auto`]) costing is provided
/// here; the remaining modes share the access bitmask but bring
/// their own costing variants.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(config), level = "debug"))]
pub fn create_costing(
    mode: TravelMode,
    config: AutoCostConfig,
) -> Result<SharedCost, CostingError> {
    match mode {
        TravelMode::Auto => {
            let costing = AutoCost::new(config).inspect_err(|err| {
                warn!("Rejected auto costing options: {err}");
            })?;

            debug!("Created costing for {mode}");
            Ok(Arc::new(costing))
        }
        unsupported => Err(CostingError::UnsupportedMode(unsupported)),
    }
}

/// Creates a costing model from a mode name (e.g. `"auto"`) and a
/// JSON options document.
pub fn create_costing_from_options(
    mode: &str,
    options: &str,
) -> Result<SharedCost, CostingError> {
    let mode =
        TravelMode::from_str(mode).map_err(|_| CostingError::UnknownMode(mode.to_string()))?;
    create_costing(mode, AutoCostConfig::from_json(options)?)
}
