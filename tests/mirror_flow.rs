//! End-to-end mirror behavior through the real FixedPostUpdate pipeline.
//!
//! These tests drive the fixed schedule by hand (like the unit tests drive
//! single systems) so timing is deterministic: `Time<Fixed>` deltas are set
//! explicitly with `advance_by` before each schedule run.

mod common;

use bevy::prelude::*;
use std::time::Duration;

use mirrorbox::plugins::mirror::components::{Facing, MirrorBox, MirrorVisual, SpinState};
use mirrorbox::plugins::mirror::geometry::CollisionBox;
use mirrorbox::plugins::player::Swing;
use mirrorbox::plugins::projectiles::components::{Bolt, BoltState, Dir4, Travel};

/// Spawn test entities far away from the built-in level layout.
const REMOTE: Vec2 = Vec2::new(5000.0, 5000.0);

fn spawn_mirror(app: &mut App, pos: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            MirrorBox,
            Facing::default(),
            SpinState::default(),
            MirrorVisual::default(),
            CollisionBox::square(64.0),
            Sprite::default(),
            Transform::from_translation(pos.extend(1.0)),
        ))
        .id()
}

fn spawn_bolt(app: &mut App, pos: Vec2, dir: Dir4, prev: Option<Dir4>) -> Entity {
    app.world_mut()
        .spawn((
            Bolt,
            BoltState::Active,
            Travel { dir, prev },
            CollisionBox::square(10.0),
            Transform::from_translation(pos.extend(2.0)),
        ))
        .id()
}

fn advance_fixed(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(secs));
    app.world_mut().run_schedule(FixedPostUpdate);
}

#[test]
fn incoming_bolt_is_redirected_and_snapped() {
    let mut app = common::app_headless();
    app.update(); // enter InGame

    spawn_mirror(&mut app, REMOTE);
    let bolt = spawn_bolt(&mut app, REMOTE + Vec2::new(20.0, 0.0), Dir4::Left, None);

    advance_fixed(&mut app, 0.016);

    let travel = app.world().get::<Travel>(bolt).unwrap();
    assert_eq!(travel.dir, Dir4::Up);
    assert_eq!(travel.prev, Some(Dir4::Left));

    let tf = app.world().get::<Transform>(bolt).unwrap();
    assert_eq!(tf.translation.x, REMOTE.x, "x snapped to the mirror's axis");
}

#[test]
fn wrong_side_bolt_is_consumed_and_despawned() {
    let mut app = common::app_headless();
    app.update();

    spawn_mirror(&mut app, REMOTE);
    let bolt = spawn_bolt(
        &mut app,
        REMOTE + Vec2::new(4.0, 0.0),
        Dir4::Up,
        Some(Dir4::Down),
    );

    advance_fixed(&mut app, 0.016);
    assert_eq!(
        *app.world().get::<BoltState>(bolt).unwrap(),
        BoltState::Resolved
    );

    // The next full frame's PostUpdate cleanup removes it.
    app.update();
    assert!(app.world().get_entity(bolt).is_err());
}

#[test]
fn swing_episode_spins_one_step() {
    let mut app = common::app_headless();
    app.update();

    let mirror = spawn_mirror(&mut app, REMOTE);
    let swing = app
        .world_mut()
        .spawn((
            Swing { used: false },
            CollisionBox::square(40.0),
            Transform::from_translation((REMOTE + Vec2::new(30.0, 0.0)).extend(2.0)),
        ))
        .id();

    // Hold the swing over the mirror across several ticks.
    advance_fixed(&mut app, 0.016);
    advance_fixed(&mut app, 0.016);

    assert!(app.world().get::<Swing>(swing).unwrap().used);
    assert!(app.world().get::<SpinState>(mirror).unwrap().is_spinning());
    // Facing holds until the clip completes.
    assert_eq!(*app.world().get::<Facing>(mirror).unwrap(), Facing::Right);

    // Let the clip run out.
    advance_fixed(&mut app, 0.5);
    assert_eq!(*app.world().get::<Facing>(mirror).unwrap(), Facing::Down);
    assert!(!app.world().get::<SpinState>(mirror).unwrap().is_spinning());

    // The consumed swing is still overlapping; nothing re-fires.
    advance_fixed(&mut app, 0.016);
    assert_eq!(*app.world().get::<Facing>(mirror).unwrap(), Facing::Down);
    assert!(!app.world().get::<SpinState>(mirror).unwrap().is_spinning());
}

#[test]
fn reflection_still_runs_while_spinning() {
    let mut app = common::app_headless();
    app.update();

    let mirror = spawn_mirror(&mut app, REMOTE);
    *app.world_mut().get_mut::<SpinState>(mirror).unwrap() = SpinState::start(10.0);

    let bolt = spawn_bolt(&mut app, REMOTE + Vec2::new(20.0, 0.0), Dir4::Left, None);
    advance_fixed(&mut app, 0.016);

    let travel = app.world().get::<Travel>(bolt).unwrap();
    assert_eq!(travel.dir, Dir4::Up);
    assert_eq!(travel.prev, Some(Dir4::Left));
}
