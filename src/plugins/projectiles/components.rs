use bevy::prelude::*;

/// Cardinal travel direction. Bolts only ever fly along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir4 {
    Up,
    Down,
    Left,
    Right,
}

impl Dir4 {
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Dir4::Up => Vec2::Y,
            Dir4::Down => Vec2::NEG_Y,
            Dir4::Left => Vec2::NEG_X,
            Dir4::Right => Vec2::X,
        }
    }

    /// Snap an arbitrary aim vector to its dominant cardinal axis.
    /// Ties and the zero vector go to the x axis.
    pub fn from_vec(v: Vec2) -> Self {
        if v.x.abs() >= v.y.abs() {
            if v.x >= 0.0 { Dir4::Right } else { Dir4::Left }
        } else if v.y >= 0.0 {
            Dir4::Up
        } else {
            Dir4::Down
        }
    }
}

/// Marker for magic bolts (the only projectile kind mirrors care about).
#[derive(Component)]
pub struct Bolt;

/// Travel state of a bolt.
///
/// `prev` is the direction held immediately before the most recent
/// redirection. It stays `None` until a mirror has redirected the bolt.
#[derive(Component, Debug, Clone, Copy)]
pub struct Travel {
    pub dir: Dir4,
    pub prev: Option<Dir4>,
}

impl Travel {
    pub fn new(dir: Dir4) -> Self {
        Self { dir, prev: None }
    }
}

/// Bolt lifecycle. A Resolved bolt has been consumed by a valid hit and is
/// never moved or reflected again; cleanup despawns it outside the fixed step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoltState {
    #[default]
    Active,
    Resolved,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
