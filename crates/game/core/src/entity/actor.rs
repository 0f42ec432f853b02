//! Behaviour and combat capabilities carried by actors.
use crate::state::EntityId;

/// Behaviour strategy driving an actor's turns.
///
/// `Ai::None` is the death signal: an actor without behaviour is inert and
/// is skipped by the enemy turn pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Ai {
    #[default]
    None,
    Hostile(HostileAi),
}

impl Ai {
    pub fn hostile() -> Self {
        Self::Hostile(HostileAi::default())
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Marker behaviour for enemies that act on their turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostileAi;

/// Combat statistics of an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    owner: Option<EntityId>,
    pub max_hp: u32,
    hp: u32,
    pub defense: u32,
    pub power: u32,
}

impl Fighter {
    pub fn new(hp: u32, defense: u32, power: u32) -> Self {
        Self {
            owner: None,
            max_hp: hp,
            hp,
            defense,
            power,
        }
    }

    /// Actor these stats belong to. `None` only while detached from any actor.
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Sets hit points, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    pub(crate) fn bind(&mut self, owner: EntityId) {
        self.owner = Some(owner);
    }
}

/// An entity capable of taking turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub ai: Ai,
    pub fighter: Fighter,
}

impl Actor {
    pub fn new(ai: Ai, fighter: Fighter) -> Self {
        Self { ai, fighter }
    }

    /// True as long as this actor can perform actions.
    pub fn is_alive(&self) -> bool {
        self.ai.is_present()
    }

    /// Removes the behaviour capability. The actor stays on its map.
    pub fn die(&mut self) {
        self.ai = Ai::None;
    }
}
