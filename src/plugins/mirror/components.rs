use bevy::prelude::*;

/// Marker for mirror boxes.
#[derive(Component)]
pub struct MirrorBox;

/// The four discrete facings of a mirror box, in rotation order.
///
/// Kept closed so an out-of-range orientation is unrepresentable; advancing
/// is `next()`, the +1 mod 4 step, and nothing else ever writes it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Facing {
    pub fn next(self) -> Self {
        match self {
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
            Facing::Up => Facing::Right,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Facing::Right => 0,
            Facing::Down => 1,
            Facing::Left => 2,
            Facing::Up => 3,
        }
    }

    /// Sprite rotation in radians: 0, 90, 180, 270 degrees screen-clockwise,
    /// which is a negative z rotation in world space.
    pub fn angle(self) -> f32 {
        -(self.index() as f32) * std::f32::consts::FRAC_PI_2
    }
}

/// Rotation clip state.
///
/// The one-shot timer is the "playable clip"; `is_finished()` answers
/// "has the clip ended", queried once per tick while spinning. A spinning
/// mirror cannot be re-triggered.
#[derive(Component, Debug, Clone, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning {
        timer: Timer,
    },
}

impl SpinState {
    pub fn start(secs: f32) -> Self {
        SpinState::Spinning {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning { .. })
    }
}

/// Presentation-only: was this mirror struck by a bolt this tick?
///
/// Recomputed from scratch every tick, never carried across ticks. Gameplay
/// truth lives in the bolts; this only drives the idle/struck tint.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MirrorVisual {
    pub struck: bool,
}
