//! Verdict commit: the single writer of bolt travel state.
//!
//! Invariant: a redirected bolt remembers its prior direction and sits
//! exactly on the mirror's axis; an absorbed bolt is Resolved and never
//! mutated again. Centralizing these writes here keeps the scan read-only
//! and makes double-application impossible.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::plugins::projectiles::components::{Bolt, BoltState, Travel};

use super::messages::{MirrorAction, MirrorVerdict};
use super::reflect::Axis;

pub fn commit_verdicts(
    mut reader: MessageReader<MirrorVerdict>,
    mut q_bolts: Query<(&mut Transform, &mut Travel, &mut BoltState), With<Bolt>>,
) {
    for verdict in reader.read() {
        let Ok((mut tf, mut travel, mut state)) = q_bolts.get_mut(verdict.bolt) else {
            // Bolt despawned between scan and commit.
            continue;
        };
        if *state != BoltState::Active {
            continue;
        }

        match verdict.action {
            MirrorAction::Redirect {
                dir,
                snap_axis,
                snap_to,
            } => {
                travel.prev = Some(travel.dir);
                travel.dir = dir;
                match snap_axis {
                    Axis::X => tf.translation.x = snap_to,
                    Axis::Y => tf.translation.y = snap_to,
                }
            }
            MirrorAction::Absorb => {
                *state = BoltState::Resolved;
            }
        }
    }
}
