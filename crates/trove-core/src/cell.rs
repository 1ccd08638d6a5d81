//! The [`CellKind`] tag stored in every grid cell.

/// What occupies a grid cell.
///
/// `Trap` and `Wall` are blocked for search purposes; the other kinds are
/// passable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Treasure,
    Trap,
    Wall,
    Start,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Empty,
        CellKind::Treasure,
        CellKind::Trap,
        CellKind::Wall,
        CellKind::Start,
    ];

    /// Whether searches must route around this cell.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, CellKind::Trap | CellKind::Wall)
    }

    /// Whether a path may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.is_blocked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_kinds() {
        let blocked: Vec<_> = CellKind::ALL.into_iter().filter(|k| k.is_blocked()).collect();
        assert_eq!(blocked, vec![CellKind::Trap, CellKind::Wall]);
        assert!(CellKind::Start.is_passable());
        assert!(CellKind::Treasure.is_passable());
    }
}
