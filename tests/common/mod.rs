//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` backs `GameState`.
//! - then `mirrorbox::game::configure_headless` installs gameplay plugins.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    mirrorbox::game::configure_headless(&mut app);
    app
}
