//! Placement factory: the closed set of placeable object kinds.
//!
//! Layout data names objects by symbolic key; the factory resolves a key to
//! a variant at load time and dispatches to the matching constructor. The
//! set of placeable kinds is fixed and known, so there is no runtime type
//! lookup anywhere.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::mirror::systems::spawn_mirror_box;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    MirrorBox,
}

impl ObjectKind {
    /// Resolve a symbolic layout key. Unknown keys are a content error the
    /// caller surfaces as fatal.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "MIRROR_BOX" => Some(ObjectKind::MirrorBox),
            _ => None,
        }
    }
}

pub fn spawn(
    kind: ObjectKind,
    commands: &mut Commands,
    tunables: &Tunables,
    pos: Vec2,
) -> Entity {
    match kind {
        ObjectKind::MirrorBox => spawn_mirror_box(commands, tunables, pos),
    }
}
