use crate::error::CostingError;

pub const SECONDS_PER_HOUR: f32 = 3600.0;

/// Kilometers in one meter. Edge lengths are in meters while
/// speed categories are in km/h.
pub const KM_PER_METER: f32 = 0.001;

/// The highest speed category a real edge may report.
pub const MAX_SPEED: u8 = 254;

/// Cost of a category with no usable speed (one hour per meter).
pub const SENTINEL_FACTOR: f32 = SECONDS_PER_HOUR;

/// Precomputed seconds per meter for every speed category.
///
/// Built once per costing model and read-only afterwards.
/// All 256 entries are defined: categories `0` and `255` hold
/// the [`SENTINEL_FACTOR`], every other category `s` holds
/// `(3600 * 0.001) / s`.
#[derive(Clone, Debug)]
pub struct SpeedCostTable {
    factors: [f32; 256],
}

impl SpeedCostTable {
    pub fn new() -> Self {
        let mut factors = [SENTINEL_FACTOR; 256];
        for speed in 1..=MAX_SPEED {
            factors[speed as usize] = (SECONDS_PER_HOUR * KM_PER_METER) / speed as f32;
        }

        Self { factors }
    }

    /// Seconds required to travel one meter at `speed`.
    #[inline(always)]
    pub fn factor(&self, speed: u8) -> f32 {
        self.factors[speed as usize]
    }

    /// Checks a raw speed category at the point of ingestion,
    /// before it is stored onto an edge.
    pub fn validate(raw: u32) -> Result<u8, CostingError> {
        u8::try_from(raw)
            .ok()
            .filter(|speed| *speed <= MAX_SPEED)
            .ok_or(CostingError::SpeedOutOfRange(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, f32)> + '_ {
        (0..=u8::MAX).map(|speed| (speed, self.factor(speed)))
    }
}

impl Default for SpeedCostTable {
    fn default() -> Self {
        Self::new()
    }
}
