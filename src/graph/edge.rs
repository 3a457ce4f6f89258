use crate::graph::{Access, HierarchyLevel};

pub use bitflag::EdgeFlags;

/// One direction of travel along a road segment, as seen by costing.
pub trait DirectedEdge {
    /// Length of the edge in meters.
    fn length(&self) -> f32;

    /// Speed category of the edge. Its meaning is owned by each
    /// costing variant; for motor vehicles it is km/h.
    fn speed(&self) -> u8;

    /// Modes permitted to travel along the edge in its direction.
    fn forward_access(&self) -> Access;

    /// Position of the edge among the outgoing edges of its start
    /// node, compared against a [`Restriction`](crate::graph::Restriction).
    fn local_edge_index(&self) -> u8;

    /// Hierarchy level of the node the edge ends at.
    fn end_node_level(&self) -> HierarchyLevel;

    /// Whether the edge summarizes a chain of edges in a
    /// higher hierarchy level.
    fn is_shortcut(&self) -> bool;

    /// Whether the edge moves up into a more important level.
    fn transitions_up(&self) -> bool;

    /// Whether the edge moves down into a less important level.
    fn transitions_down(&self) -> bool;

    /// Whether the edge leads into an area without through traffic.
    fn not_thru(&self) -> bool;

    #[inline]
    fn is_transition(&self) -> bool {
        self.transitions_up() || self.transitions_down()
    }
}

mod bitflag {
    use bitflags::bitflags;

    bitflags! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct EdgeFlags: u8 {
            const SHORTCUT = 1 << 0;
            const TRANSITION_UP = 1 << 1;
            const TRANSITION_DOWN = 1 << 2;
            const NOT_THRU = 1 << 3;
        }
    }
}

/// A plain directed edge value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeRecord {
    pub length: f32,
    pub speed: u8,
    pub access: Access,
    pub local_index: u8,
    pub end_level: HierarchyLevel,
    pub flags: EdgeFlags,
}

impl EdgeRecord {
    /// A regular road edge of `length` meters at the given speed
    /// category, open to `access`.
    pub const fn new(length: f32, speed: u8, access: Access) -> Self {
        Self {
            length,
            speed,
            access,
            local_index: 0,
            end_level: 0,
            flags: EdgeFlags::empty(),
        }
    }

    /// A zero-length edge connecting one location across two levels.
    /// Moves up when the end level is more important than `from`.
    pub fn transition(from: HierarchyLevel, to: HierarchyLevel, access: Access) -> Self {
        let direction = if to < from {
            EdgeFlags::TRANSITION_UP
        } else {
            EdgeFlags::TRANSITION_DOWN
        };

        Self {
            length: 0.0,
            end_level: to,
            flags: direction,
            ..Self::new(0.0, 0, access)
        }
    }

    pub const fn with_local_index(self, local_index: u8) -> Self {
        Self {
            local_index,
            ..self
        }
    }

    pub const fn with_end_level(self, end_level: HierarchyLevel) -> Self {
        Self { end_level, ..self }
    }

    pub fn with_flags(self, flags: EdgeFlags) -> Self {
        Self {
            flags: self.flags | flags,
            ..self
        }
    }
}

impl DirectedEdge for EdgeRecord {
    #[inline]
    fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    fn speed(&self) -> u8 {
        self.speed
    }

    #[inline]
    fn forward_access(&self) -> Access {
        self.access
    }

    #[inline]
    fn local_edge_index(&self) -> u8 {
        self.local_index
    }

    #[inline]
    fn end_node_level(&self) -> HierarchyLevel {
        self.end_level
    }

    #[inline]
    fn is_shortcut(&self) -> bool {
        self.flags.contains(EdgeFlags::SHORTCUT)
    }

    #[inline]
    fn transitions_up(&self) -> bool {
        self.flags.contains(EdgeFlags::TRANSITION_UP)
    }

    #[inline]
    fn transitions_down(&self) -> bool {
        self.flags.contains(EdgeFlags::TRANSITION_DOWN)
    }

    #[inline]
    fn not_thru(&self) -> bool {
        self.flags.contains(EdgeFlags::NOT_THRU)
    }
}

impl<T> DirectedEdge for &T
where
    T: DirectedEdge + ?Sized,
{
    fn length(&self) -> f32 {
        (**self).length()
    }

    fn speed(&self) -> u8 {
        (**self).speed()
    }

    fn forward_access(&self) -> Access {
        (**self).forward_access()
    }

    fn local_edge_index(&self) -> u8 {
        (**self).local_edge_index()
    }

    fn end_node_level(&self) -> HierarchyLevel {
        (**self).end_node_level()
    }

    fn is_shortcut(&self) -> bool {
        (**self).is_shortcut()
    }

    fn transitions_up(&self) -> bool {
        (**self).transitions_up()
    }

    fn transitions_down(&self) -> bool {
        (**self).transitions_down()
    }

    fn not_thru(&self) -> bool {
        (**self).not_thru()
    }
}
