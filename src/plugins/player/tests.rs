use bevy::prelude::*;
use std::time::Duration;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::{Dir4, Lifetime};

fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);
    assert!(world.query::<&super::Player>().iter(&world).next().is_some());
}

#[test]
fn apply_movement_moves_and_re_aims() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_speed: 100.0,
        ..Tunables::default()
    });
    world.insert_resource(super::PlayerInput {
        move_axis: Vec2::new(0.0, 1.0),
        swing: false,
    });
    world.insert_resource(fixed_time_with_delta(0.5));
    let player = world
        .spawn((super::Player { aim: Dir4::Right }, Transform::default()))
        .id();

    run_system_once(&mut world, super::apply_movement);

    let tf = world.get::<Transform>(player).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(0.0, 50.0));
    assert_eq!(world.get::<super::Player>(player).unwrap().aim, Dir4::Up);
}

#[test]
fn idle_input_keeps_previous_aim() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(super::PlayerInput::default());
    world.insert_resource(fixed_time_with_delta(0.5));
    let player = world
        .spawn((super::Player { aim: Dir4::Down }, Transform::default()))
        .id();

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(world.get::<super::Player>(player).unwrap().aim, Dir4::Down);
}

#[test]
fn spawn_swing_reaches_along_aim() {
    let mut world = World::new();
    let tunables = Tunables::default();
    let mut queue = bevy::ecs::world::CommandQueue::default();
    let swing = {
        let mut commands = Commands::new(&mut queue, &world);
        super::spawn_swing(&mut commands, &tunables, Vec2::ZERO, Dir4::Right)
    };
    queue.apply(&mut world);

    let tf = world.get::<Transform>(swing).unwrap();
    assert_eq!(
        tf.translation.truncate(),
        Vec2::new(tunables.swing_reach, 0.0)
    );
    assert!(!world.get::<super::Swing>(swing).unwrap().used);
}

#[test]
fn swing_hitbox_expires() {
    let mut world = World::new();
    world.insert_resource(fixed_time_with_delta(0.2));
    let swing = world
        .spawn((
            super::Swing { used: false },
            Lifetime(Timer::from_seconds(0.18, TimerMode::Once)),
            Transform::default(),
        ))
        .id();

    run_system_once(&mut world, super::swing_lifetime);
    assert!(world.get_entity(swing).is_err());
}
