use crate::graph::{Access, DirectedEdge};

/// An edge filter handed to location search, so that route
/// endpoints are never anchored onto edges the mode cannot route
/// through.
///
/// Holds only the access bit of the travel mode, hence is `Copy`
/// and may be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFilter {
    access: Access,
}

impl EdgeFilter {
    pub const fn new(access: Access) -> Self {
        Self { access }
    }

    /// Returns `true` if the edge should be excluded. Transition
    /// edges are always excluded, as are edges without forward
    /// access for the mode.
    #[inline]
    pub fn excludes<E>(&self, edge: &E) -> bool
    where
        E: DirectedEdge + ?Sized,
    {
        edge.is_transition() || !edge.forward_access().contains(self.access)
    }

    /// The inverse of [`EdgeFilter::excludes`], useful as an
    /// iterator predicate.
    #[inline]
    pub fn accepts<E>(&self, edge: &E) -> bool
    where
        E: DirectedEdge + ?Sized,
    {
        !self.excludes(edge)
    }
}
