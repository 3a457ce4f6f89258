use crate::graph::Access;

/// A graph node, as seen by costing.
pub trait NodeInfo {
    /// Modes which may pass through the node. Physical barriers,
    /// such as gates or bollards, clear the bits of blocked modes.
    fn access(&self) -> Access;
}

/// A plain node value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeRecord {
    pub access: Access,
}

impl NodeRecord {
    pub const fn new(access: Access) -> Self {
        Self { access }
    }

    /// A node open to every mode.
    pub const fn open() -> Self {
        Self::new(Access::all())
    }
}

impl NodeInfo for NodeRecord {
    #[inline]
    fn access(&self) -> Access {
        self.access
    }
}

impl<T> NodeInfo for &T
where
    T: NodeInfo + ?Sized,
{
    fn access(&self) -> Access {
        (**self).access()
    }
}
