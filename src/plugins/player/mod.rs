//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write `PlayerInput`; spawn swings/bolts on press
//! - FixedUpdate: apply velocity to the transform
//!
//! Input resources are read through `Option<Res<...>>` so these systems
//! become no-ops in headless test apps without the input plugin.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::mirror::geometry::CollisionBox;
use crate::plugins::projectiles::components::{Dir4, Lifetime};
use crate::plugins::projectiles::systems::spawn_bolt;

/// The player. `aim` tracks the last cardinal move direction and is where
/// swings come out.
#[derive(Component, Debug)]
pub struct Player {
    pub aim: Dir4,
}

/// Melee swing hitbox — the mirror activator.
///
/// `used` is the one-shot guard a mirror sets when this swing triggers a
/// rotation, so holding the hitbox over a mirror fires exactly once.
#[derive(Component, Debug)]
pub struct Swing {
    pub used: bool,
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
    swing: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, swing_attacks, cast_bolts))
        .add_systems(FixedUpdate, (apply_movement, swing_lifetime));
}

fn spawn(mut commands: Commands) {
    commands.spawn((
        Name::new("Player"),
        Player { aim: Dir4::Right },
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(26.0)),
            ..default()
        },
        Transform::from_xyz(-240.0, 0.0, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec2::ZERO
    };
    input.swing = keys.just_pressed(KeyCode::Space);
}

fn apply_movement(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut Transform, &mut Player)>,
) {
    let Ok((mut tf, mut player)) = q_player.single_mut() else {
        return;
    };

    tf.translation += (input.move_axis * tunables.player_speed * time.delta_secs()).extend(0.0);

    if input.move_axis != Vec2::ZERO {
        player.aim = Dir4::from_vec(input.move_axis);
    }
}

/// Spawn a swing hitbox in front of `origin`, reaching along `dir`.
///
/// A plain function so the input system and tests share one construction
/// path.
pub fn spawn_swing(
    commands: &mut Commands,
    tunables: &Tunables,
    origin: Vec2,
    dir: Dir4,
) -> Entity {
    let pos = origin + dir.unit() * tunables.swing_reach;
    commands
        .spawn((
            Name::new("Swing"),
            Swing { used: false },
            CollisionBox::square(tunables.swing_size),
            Sprite {
                color: Color::srgba(0.9, 0.9, 0.95, 0.35),
                custom_size: Some(Vec2::splat(tunables.swing_size)),
                ..default()
            },
            Transform::from_translation(pos.extend(2.0)),
            Lifetime(Timer::from_seconds(
                tunables.swing_lifetime_secs,
                TimerMode::Once,
            )),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

fn swing_attacks(
    mut commands: Commands,
    input: Res<PlayerInput>,
    tunables: Res<Tunables>,
    q_player: Query<(&Transform, &Player)>,
) {
    if !input.swing {
        return;
    }
    let Ok((tf, player)) = q_player.single() else {
        return;
    };
    spawn_swing(
        &mut commands,
        &tunables,
        tf.translation.truncate(),
        player.aim,
    );
}

/// Cast a magic bolt toward the cursor on left click, snapped to the
/// dominant cardinal axis.
fn cast_bolts(
    mut commands: Commands,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform)>,
    q_player: Query<&Transform, With<Player>>,
    tunables: Res<Tunables>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };
    let Ok(world_cursor) = camera.viewport_to_world_2d(camera_tf, cursor) else {
        debug!("viewport_to_world_2d failed; dropping cast");
        return;
    };

    let origin = player_tf.translation.truncate();
    let dir = Dir4::from_vec(world_cursor - origin);
    spawn_bolt(&mut commands, &tunables, origin + dir.unit() * 20.0, dir);
}

/// Tick swing hitbox lifetimes.
pub fn swing_lifetime(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime), With<Swing>>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).despawn();
        }
    }
}

#[cfg(test)]
mod tests;
