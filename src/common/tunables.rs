//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub player_speed: f32,
    pub bolt_speed: f32,
    pub bolt_size: f32,
    pub bolt_lifetime_secs: f32,
    pub mirror_size: f32,
    pub spin_secs: f32,
    pub swing_size: f32,
    pub swing_reach: f32,
    pub swing_lifetime_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_speed: 260.0,
            bolt_speed: 520.0,
            bolt_size: 10.0,
            bolt_lifetime_secs: 4.0,
            mirror_size: 64.0,
            spin_secs: 0.35,
            swing_size: 40.0,
            swing_reach: 34.0,
            swing_lifetime_secs: 0.18,
        }
    }
}
