/// A per-step turn restriction mask supplied by the search layer.
///
/// Bit `i` set means entering via the edge whose local index is `i`
/// is forbidden at this time. Timed and conditional restrictions are
/// resolved upstream and arrive here already folded into the mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Restriction(pub u32);

impl Restriction {
    pub const NONE: Restriction = Restriction(0);

    /// Creates a mask forbidding each of the given local edge indices.
    /// Indices beyond the width of the mask are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        indices.into_iter().fold(Self::NONE, |mask, index| {
            Restriction(mask.0 | 1u32.checked_shl(index as u32).unwrap_or(0))
        })
    }

    /// Whether entering via the edge at `local_index` is forbidden.
    ///
    /// Edges with a local index of 32 or more cannot be expressed
    /// in the mask, and so are never restricted by it.
    #[inline]
    pub const fn forbids(&self, local_index: u8) -> bool {
        match 1u32.checked_shl(local_index as u32) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }
}

impl From<u32> for Restriction {
    fn from(value: u32) -> Self {
        Restriction(value)
    }
}
