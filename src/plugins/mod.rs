//! Feature plugins.

use bevy::prelude::*;

pub mod bananas;
pub mod core;
pub mod levels;
pub mod physics;
pub mod player;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;
pub mod trail;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    levels::plugin(app);
    world::plugin(app);
    player::plugin(app);
    bananas::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    hud::plugin(app);
    trail::plugin(app);
}
