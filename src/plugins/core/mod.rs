//! Core plugin: shared resources and global settings.

use crate::common::{policy::DashPolicy, tunables::Tunables};
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.init_resource::<DashPolicy>();
    app.insert_resource(ClearColor(Color::srgb(0.52, 0.74, 0.86)));
}

#[cfg(test)]
mod tests;
