//! Magic bolts: 4-directional projectiles.
//!
//! Bolts carry their travel state (`Travel`) and a lifecycle enum
//! (`BoltState`). The mirror plugin reads both and proposes changes through
//! messages; nothing here knows how reflection works.
//!
//! Schedules:
//! - FixedUpdate: movement + lifetime (simulation)
//! - PostUpdate: despawn resolved bolts (structural cleanup)

use bevy::prelude::*;

use crate::common::state::GameState;

pub mod components;
pub mod systems;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (systems::move_bolts, systems::bolt_lifetime).run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        PostUpdate,
        systems::despawn_resolved.run_if(in_state(GameState::InGame)),
    );
}
