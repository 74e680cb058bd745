//! Tunable gameplay constants.
//!
//! Distances are world units, speeds are units per second, durations are
//! seconds of virtual (simulation) time.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Camera zoom: how many screen pixels one world unit covers.
    pub pixels_per_unit: f32,
    /// World gravity (units/s^2, pointing down).
    pub gravity: f32,
    /// Gravity scale the player body starts with. The dash zeroes it.
    pub player_gravity_scale: f32,

    pub run_speed: f32,
    pub jump_power: f32,
    /// Multiplier applied to upward velocity when jump is released early.
    pub jump_cut: f32,

    pub wall_slide_speed: f32,
    /// Grace window after leaving a wall slide during which a wall jump is allowed.
    pub wall_jump_grace: f32,
    /// How long a wall jump keeps exclusive control of the velocity.
    pub wall_jump_duration: f32,
    pub wall_jump_power: Vec2,

    pub dash_power: f32,
    pub dash_time: f32,

    /// Radius of the ground and wall overlap probes.
    pub probe_radius: f32,
    pub starting_bananas: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_unit: 32.0,
            gravity: 9.81,
            player_gravity_scale: 4.0,
            run_speed: 10.0,
            jump_power: 17.0,
            jump_cut: 0.5,
            wall_slide_speed: 2.0,
            wall_jump_grace: 0.2,
            wall_jump_duration: 0.4,
            wall_jump_power: Vec2::new(22.0, 20.0),
            dash_power: 15.0,
            dash_time: 0.2,
            probe_radius: 0.2,
            starting_bananas: 3,
        }
    }
}
