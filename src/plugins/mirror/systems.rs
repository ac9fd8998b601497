use bevy::ecs::message::MessageWriter;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::player::Swing;
use crate::plugins::projectiles::components::{Bolt, BoltState, Travel};

use super::components::{Facing, MirrorBox, MirrorVisual, SpinState};
use super::geometry::{overlaps, Aabb, CollisionBox};
use super::messages::{MirrorAction, MirrorVerdict};
use super::reflect::{judge, Axis, Verdict};

const IDLE_COLOR: Color = Color::srgb(0.62, 0.68, 0.78);
const STRUCK_COLOR: Color = Color::srgb(1.0, 0.9, 0.45);

/// Spawn a mirror box at `pos`, facing right and idle.
pub fn spawn_mirror_box(commands: &mut Commands, tunables: &Tunables, pos: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("MirrorBox"),
            MirrorBox,
            Facing::default(),
            SpinState::default(),
            MirrorVisual::default(),
            CollisionBox::square(tunables.mirror_size),
            Sprite {
                color: IDLE_COLOR,
                custom_size: Some(Vec2::splat(tunables.mirror_size)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0)),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Idle -> Spinning on a fresh swing overlap.
///
/// The swing owns the one-shot guard: a swing held overlapping for many
/// ticks triggers exactly one rotation. A spinning mirror ignores swings;
/// an unconsumed swing may still trigger it after the clip ends.
pub fn trigger_spin(
    tunables: Res<Tunables>,
    mut q_mirrors: Query<(&Transform, &CollisionBox, &mut SpinState), With<MirrorBox>>,
    mut q_swings: Query<(&Transform, &CollisionBox, &mut Swing), Without<MirrorBox>>,
) {
    for (mirror_tf, mirror_hitbox, mut spin) in &mut q_mirrors {
        if spin.is_spinning() {
            continue;
        }
        let mirror_aabb = Aabb::of(mirror_tf, mirror_hitbox);

        for (swing_tf, swing_hitbox, mut swing) in &mut q_swings {
            if swing.used {
                continue;
            }
            if !overlaps(&mirror_aabb, &Aabb::of(swing_tf, swing_hitbox)) {
                continue;
            }

            swing.used = true;
            *spin = SpinState::start(tunables.spin_secs);
            break;
        }
    }
}

/// Per-tick bolt scan.
///
/// Resets every mirror's struck flag, then proposes a verdict for each
/// overlapping, unresolved bolt. The first mirror in iteration order claims
/// a bolt, so a bolt receives at most one verdict per tick even where
/// mirrors overlap.
///
/// This system mutates no bolt: all effects go through `MirrorVerdict`
/// messages applied by `commit::commit_verdicts`.
pub fn scan_bolts(
    mut claimed: Local<HashSet<Entity>>,
    mut q_mirrors: Query<(&Transform, &CollisionBox, &Facing, &mut MirrorVisual), With<MirrorBox>>,
    q_bolts: Query<(Entity, &Transform, &CollisionBox, &Travel, &BoltState), With<Bolt>>,
    mut writer: MessageWriter<MirrorVerdict>,
) {
    claimed.clear();

    for (mirror_tf, mirror_hitbox, facing, mut visual) in &mut q_mirrors {
        visual.struck = false;
        let mirror_aabb = Aabb::of(mirror_tf, mirror_hitbox);

        for (bolt, bolt_tf, bolt_hitbox, travel, state) in &q_bolts {
            if *state != BoltState::Active {
                continue;
            }
            if !overlaps(&mirror_aabb, &Aabb::of(bolt_tf, bolt_hitbox)) {
                continue;
            }

            visual.struck = true;

            if claimed.contains(&bolt) {
                continue;
            }

            let action = match judge(*facing, travel.dir, travel.prev) {
                Verdict::Pass => continue,
                Verdict::Redirect { dir, snap } => MirrorAction::Redirect {
                    dir,
                    snap_axis: snap,
                    snap_to: match snap {
                        Axis::X => mirror_aabb.center.x,
                        Axis::Y => mirror_aabb.center.y,
                    },
                },
                Verdict::Absorb => MirrorAction::Absorb,
            };

            claimed.insert(bolt);
            writer.write(MirrorVerdict { bolt, action });
        }
    }
}

/// Tick the rotation clip; on completion advance the facing one step and
/// return to idle. The facing never changes mid-clip.
pub fn advance_spin(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut SpinState, &mut Facing), With<MirrorBox>>,
) {
    for (mut spin, mut facing) in &mut q {
        let SpinState::Spinning { timer } = &mut *spin else {
            continue;
        };

        timer.tick(time.delta());
        if timer.is_finished() {
            *facing = facing.next();
            *spin = SpinState::Idle;
        }
    }
}

/// Derive the mirror sprite from gameplay truth.
///
/// Rotation follows the facing, sweeping through the clip while spinning.
/// The struck tint is suppressed during the clip.
pub fn mirror_visuals(
    mut q: Query<(&Facing, &SpinState, &MirrorVisual, &mut Sprite, &mut Transform), With<MirrorBox>>,
) {
    for (facing, spin, visual, mut sprite, mut tf) in &mut q {
        let angle = match spin {
            SpinState::Idle => facing.angle(),
            SpinState::Spinning { timer } => {
                facing.angle() - timer.fraction() * std::f32::consts::FRAC_PI_2
            }
        };
        tf.rotation = Quat::from_rotation_z(angle);

        sprite.color = if !spin.is_spinning() && visual.struck {
            STRUCK_COLOR
        } else {
            IDLE_COLOR
        };
    }
}
