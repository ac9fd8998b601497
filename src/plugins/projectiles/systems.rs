use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::mirror::geometry::CollisionBox;

use super::components::{Bolt, BoltState, Dir4, Lifetime, Travel};

/// Spawn a magic bolt travelling in `dir`.
///
/// Exposed as a plain function so the caster system and tests share one
/// construction path.
pub fn spawn_bolt(commands: &mut Commands, tunables: &Tunables, pos: Vec2, dir: Dir4) -> Entity {
    commands
        .spawn((
            Name::new("Bolt"),
            Bolt,
            BoltState::Active,
            Travel::new(dir),
            CollisionBox::square(tunables.bolt_size),
            Sprite {
                color: Color::srgb(0.55, 0.85, 1.0),
                custom_size: Some(Vec2::splat(tunables.bolt_size)),
                ..default()
            },
            Transform::from_translation(pos.extend(2.0)),
            Lifetime(Timer::from_seconds(tunables.bolt_lifetime_secs, TimerMode::Once)),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Discrete-direction movement: translation advances along the travel axis.
/// Resolved bolts stop dead so a wrong-side hit can't drift before cleanup.
pub fn move_bolts(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Transform, &Travel, &BoltState), With<Bolt>>,
) {
    let step = tunables.bolt_speed * time.delta_secs();
    for (mut tf, travel, state) in &mut q {
        if *state != BoltState::Active {
            continue;
        }
        tf.translation += (travel.dir.unit() * step).extend(0.0);
    }
}

pub fn bolt_lifetime(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime), With<Bolt>>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).despawn();
        }
    }
}

/// Structural cleanup: despawn resolved bolts.
///
/// Runs in PostUpdate so despawns never happen inside the fixed step where
/// other systems may still hold verdicts for the entity.
pub fn despawn_resolved(mut commands: Commands, q: Query<(Entity, &BoltState), With<Bolt>>) {
    for (e, state) in &q {
        if *state == BoltState::Resolved {
            commands.entity(e).despawn();
        }
    }
}
