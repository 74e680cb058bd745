//! Ground and wall contact probes.
//!
//! Two fixed-radius circle overlap checks, one under the feet and one at the
//! side the character faces. The result is cached on `MovementState` once
//! per frame so the slide, jump and dash logic never query the physics
//! world themselves.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};

use super::Player;
use super::state::{Contacts, MovementState};

/// The physics world, seen as "is anything on `layer` inside this circle".
pub trait OverlapQuery {
    fn is_overlapping(&self, point: Vec2, radius: f32, layer: Layer) -> bool;
}

impl OverlapQuery for SpatialQuery<'_, '_> {
    fn is_overlapping(&self, point: Vec2, radius: f32, layer: Layer) -> bool {
        let filter = SpatialQueryFilter::from_mask(layer);
        !self
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter)
            .is_empty()
    }
}

/// Probe anchors relative to the body origin. The wall anchor is given for
/// a right-facing body and mirrors with the horizontal scale sign.
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactProbe {
    pub ground_anchor: Vec2,
    pub wall_anchor: Vec2,
}

impl ContactProbe {
    #[inline]
    pub fn ground_point(&self, origin: Vec2) -> Vec2 {
        origin + self.ground_anchor
    }

    #[inline]
    pub fn wall_point(&self, origin: Vec2, scale_x: f32) -> Vec2 {
        origin + Vec2::new(self.wall_anchor.x * scale_x.signum(), self.wall_anchor.y)
    }

    pub fn sample(
        &self,
        world: &impl OverlapQuery,
        origin: Vec2,
        scale_x: f32,
        radius: f32,
    ) -> Contacts {
        Contacts {
            grounded: world.is_overlapping(self.ground_point(origin), radius, Layer::Ground),
            walled: world.is_overlapping(self.wall_point(origin, scale_x), radius, Layer::Wall),
        }
    }
}

/// Samples at the physics `Position`. The `Transform` of an interpolated
/// body trails it by up to one tick.
pub fn probe_contacts(
    spatial: SpatialQuery,
    tunables: Res<Tunables>,
    mut q_player: Query<(&Position, &Transform, &ContactProbe, &mut MovementState), With<Player>>,
) {
    for (position, tf, probe, mut state) in &mut q_player {
        let contacts = probe.sample(&spatial, position.0, tf.scale.x, tunables.probe_radius);

        if contacts.grounded != state.contacts.grounded {
            debug!("grounded -> {}", contacts.grounded);
        }
        state.contacts = contacts;
    }
}
