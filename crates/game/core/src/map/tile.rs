use bitflags::bitflags;

bitflags! {
    /// Static properties of a single map cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TileFlags: u8 {
        const WALKABLE    = 1 << 0;
        const TRANSPARENT = 1 << 1;
    }
}

impl TileFlags {
    pub const WALL: Self = Self::empty();
    pub const FLOOR: Self = Self::WALKABLE.union(Self::TRANSPARENT);

    pub fn is_walkable(self) -> bool {
        self.contains(Self::WALKABLE)
    }

    pub fn is_transparent(self) -> bool {
        self.contains(Self::TRANSPARENT)
    }
}
