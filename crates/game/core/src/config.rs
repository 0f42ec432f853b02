/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Radius of the player's field of view, in tiles.
    pub fov_radius: u32,
}

impl GameConfig {
    pub const DEFAULT_FOV_RADIUS: u32 = 10;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
        }
    }

    pub fn with_fov_radius(fov_radius: u32) -> Self {
        Self {
            fov_radius: fov_radius.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
