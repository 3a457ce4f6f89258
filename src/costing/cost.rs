use pathfinding::num_traits::Zero;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

/// The cost of traversing an edge.
///
/// Holds the opaque ranking cost, used to order the search
/// frontier, alongside the real elapsed time in seconds. The two
/// are kept apart so that a variant may penalise ranking (for
/// example on turns) without inflating the reported travel time.
///
/// Ordering and equality consider the ranking cost only.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cost {
    pub cost: f32,
    pub secs: f32,
}

impl Cost {
    #[inline]
    pub const fn new(cost: f32, secs: f32) -> Self {
        Self { cost, secs }
    }

    /// A cost which can never be improved upon, for edges the
    /// search may not take.
    pub const INFINITE: Cost = Cost::new(f32::INFINITY, f32::INFINITY);

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cost.is_finite()
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

impl Add<Self> for Cost {
    type Output = Cost;

    fn add(self, rhs: Self) -> Self::Output {
        Cost::new(self.cost + rhs.cost, self.secs + rhs.secs)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Self) {
        self.cost += rhs.cost;
        self.secs += rhs.secs;
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Cost::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.cost == 0.0 && self.secs == 0.0
    }
}
