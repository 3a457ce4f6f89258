pub use bitflag::Access;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Travel modes which hold a well-known bit in the shared
/// [`Access`] bitmask of every edge and node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TravelMode {
    #[default]
    Auto,
    Pedestrian,
    Bicycle,
    Truck,
    Emergency,
    Taxi,
    Bus,
    /// High-occupancy vehicles
    Hov,
}

mod bitflag {
    use super::TravelMode;
    use bitflags::bitflags;

    bitflags! {
        /// Access rights of an edge or node. The bit assignment
        /// is shared by all costing variants.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct Access: u16 {
            const AUTO = 1 << 0;
            const PEDESTRIAN = 1 << 1;
            const BICYCLE = 1 << 2;
            const TRUCK = 1 << 3;
            const EMERGENCY = 1 << 4;
            const TAXI = 1 << 5;
            const BUS = 1 << 6;
            const HOV = 1 << 7;
        }
    }

    impl TravelMode {
        pub const fn to_flag(self) -> Access {
            match self {
                TravelMode::Auto => Access::AUTO,
                TravelMode::Pedestrian => Access::PEDESTRIAN,
                TravelMode::Bicycle => Access::BICYCLE,
                TravelMode::Truck => Access::TRUCK,
                TravelMode::Emergency => Access::EMERGENCY,
                TravelMode::Taxi => Access::TAXI,
                TravelMode::Bus => Access::BUS,
                TravelMode::Hov => Access::HOV,
            }
        }
    }

    impl Access {
        /// Whether the given mode may pass.
        #[inline]
        pub const fn permits(&self, mode: TravelMode) -> bool {
            self.contains(mode.to_flag())
        }
    }
}
