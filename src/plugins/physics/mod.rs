use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// World is laid out in units, not pixels, so the length unit stays at 1.
pub fn plugin(app: &mut App) {
    let gravity = app.world().resource::<Tunables>().gravity;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(1.0));
    app.insert_resource(Gravity(Vec2::NEG_Y * gravity));
}
