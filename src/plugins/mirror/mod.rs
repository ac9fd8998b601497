//! Mirror box plugin: a rotating reflector for magic bolts.
//!
//! A mirror box holds one of four facings. Sword swings rotate it one step;
//! bolts that fly into it get turned by 90 degrees according to the facing's
//! reflection table, and bolts that hit its back are consumed.
//!
//! # Data flow (per fixed tick)
//! ```text
//! FixedPostUpdate
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ (A) trigger_spin                                                 │
//! │     - reads: swing hitboxes                                      │
//! │     - writes: SpinState (Idle -> Spinning), Swing.used           │
//! │                                                                  │
//! │ (B) scan_bolts                                                   │
//! │     - reads: bolt Travel/BoltState, mirror Facing                │
//! │     - writes: MirrorVisual.struck (reset + set),                 │
//! │               MirrorVerdict messages (redirect / absorb)         │
//! │     - dedupe: Local<HashSet> so one mirror claims a bolt         │
//! │                                                                  │
//! │ (C) commit_verdicts  — the single writer of bolt travel state    │
//! │     - mutates: Travel.dir/prev, Transform (axis snap),           │
//! │               BoltState -> Resolved                              │
//! │                                                                  │
//! │ (D) advance_spin                                                 │
//! │     - ticks the clip; on completion Facing += 1 (mod 4)          │
//! └──────────────────────────────────────────────────────────────────┘
//! PostUpdate
//!   mirror_visuals: sprite rotation + struck/idle tint (presentation only)
//!   (resolved bolts are despawned by the projectiles plugin)
//! ```
//!
//! # Why messages instead of direct mutation?
//! The scan reads shared bolt state that other systems also own. It only
//! enqueues intent; `commit_verdicts` is the single system that mutates
//! bolts, which pins down ordering and rules out double-application.

pub mod components;
pub mod geometry;
pub mod reflect;

pub mod messages;
pub mod systems;
pub mod commit;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

/// Maintain verdict message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_verdict_messages(mut msgs: ResMut<Messages<messages::MirrorVerdict>>) {
    msgs.update();
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Messages<messages::MirrorVerdict>>();
    app.add_systems(PostUpdate, update_verdict_messages);

    app.add_systems(
        FixedPostUpdate,
        (
            systems::trigger_spin,
            systems::scan_bolts.after(systems::trigger_spin),
            commit::commit_verdicts.after(systems::scan_bolts),
            systems::advance_spin.after(commit::commit_verdicts),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        systems::mirror_visuals.run_if(in_state(GameState::InGame)),
    );
}
