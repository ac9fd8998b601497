mod common;

use mirrorbox::plugins::mirror::components::{Facing, MirrorBox};
use mirrorbox::plugins::player::Player;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn layout_places_mirrors_and_player() {
    let mut app = common::app_headless();

    // First update runs the InGame OnEnter systems.
    app.update();

    let mirrors = app
        .world_mut()
        .query::<(&MirrorBox, &Facing)>()
        .iter(app.world())
        .count();
    assert!(mirrors >= 1, "layout should place at least one mirror box");

    let players = app
        .world_mut()
        .query::<&Player>()
        .iter(app.world())
        .count();
    assert_eq!(players, 1);
}
