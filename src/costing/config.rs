use crate::costing::MAX_SPEED;
use crate::error::CostingError;
use crate::graph::HierarchyLevel;

use serde::{Deserialize, Serialize};

/// Distance (meters) separating "near" from "far" for a hierarchy
/// transition. Transitions ending at `level` use `at_level`, all
/// others use `otherwise`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TransitionThreshold {
    pub level: HierarchyLevel,
    pub at_level: f32,
    pub otherwise: f32,
}

impl TransitionThreshold {
    #[inline]
    pub fn distance(&self, end_level: HierarchyLevel) -> f32 {
        if end_level == self.level {
            self.at_level
        } else {
            self.otherwise
        }
    }
}

/// Tunable options of the auto costing model.
///
/// Any option missing from a parsed document keeps its default.
///
/// ```rust
/// use routers_costing::costing::AutoCostConfig;
///
/// let config = AutoCostConfig::from_json(r#"{ "not_thru_max_distance": 2500.0 }"#)?;
/// assert_eq!(config.not_thru_max_distance, 2500.0);
/// assert_eq!(config.heuristic_speed, 120);
/// # Ok::<(), routers_costing::CostingError>(())
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AutoCostConfig {
    /// Upward transitions are taken only when the destination is
    /// farther than this.
    pub transition_up: TransitionThreshold,

    /// Downward transitions are taken only when the destination is
    /// closer than this.
    pub transition_down: TransitionThreshold,

    /// Shortcuts are skipped when the destination is closer than this.
    pub shortcut_min_distance: f32,

    /// No-through edges are entered only when the destination is
    /// within this distance.
    pub not_thru_max_distance: f32,

    /// The fastest plausible speed category, from which the A*
    /// heuristic factor is taken.
    pub heuristic_speed: u8,

    /// Costs closer than this sort as equal.
    pub unit_size: f32,

    /// Speed categories above this are reported in diagnostic builds.
    pub speed_warning: u8,
}

impl Default for AutoCostConfig {
    fn default() -> Self {
        Self {
            transition_up: TransitionThreshold {
                level: 0,
                at_level: 50_000.0,
                otherwise: 10_000.0,
            },
            transition_down: TransitionThreshold {
                level: 1,
                at_level: 50_000.0,
                otherwise: 10_000.0,
            },
            shortcut_min_distance: 10_000.0,
            not_thru_max_distance: 5_000.0,
            heuristic_speed: 120,
            unit_size: 1.0,
            speed_warning: 150,
        }
    }
}

impl AutoCostConfig {
    /// Parses a JSON costing options document. The result is
    /// validated before it is returned.
    pub fn from_json(options: &str) -> Result<Self, CostingError> {
        let config: AutoCostConfig = serde_json::from_str(options)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CostingError> {
        let distances = [
            ("transition_up.at_level", self.transition_up.at_level),
            ("transition_up.otherwise", self.transition_up.otherwise),
            ("transition_down.at_level", self.transition_down.at_level),
            ("transition_down.otherwise", self.transition_down.otherwise),
            ("shortcut_min_distance", self.shortcut_min_distance),
            ("not_thru_max_distance", self.not_thru_max_distance),
        ];

        if let Some((name, value)) = distances
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(CostingError::InvalidConfig(format!(
                "{name} must be a finite, non-negative distance, got {value}"
            )));
        }

        if self.heuristic_speed == 0 || self.heuristic_speed > MAX_SPEED {
            return Err(CostingError::InvalidConfig(format!(
                "heuristic_speed must be within 1..={MAX_SPEED}, got {}",
                self.heuristic_speed
            )));
        }

        if !self.unit_size.is_finite() || self.unit_size <= 0.0 {
            return Err(CostingError::InvalidConfig(format!(
                "unit_size must be finite and positive, got {}",
                self.unit_size
            )));
        }

        Ok(())
    }
}
