//! Buffered mirror verdicts.
//!
//! The scan proposes, the commit disposes: the reflection pass never touches
//! a bolt directly. It writes `MirrorVerdict` messages and the single commit
//! system applies them, so all cross-entity mutation funnels through one
//! writer.

use bevy::prelude::*;

use crate::plugins::projectiles::components::Dir4;

use super::reflect::Axis;

#[derive(Debug, Clone, Copy)]
pub enum MirrorAction {
    /// Redirect the bolt and pin `snap_axis` to `snap_to`, the mirror's
    /// center coordinate on that axis.
    Redirect {
        dir: Dir4,
        snap_axis: Axis,
        snap_to: f32,
    },
    /// Consume the bolt (wrong-side hit).
    Absorb,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct MirrorVerdict {
    pub bolt: Entity,
    pub action: MirrorAction,
}
