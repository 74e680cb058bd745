//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Ground,
    Wall,
    Player,
    /// Banana pickups and level exits. Sensors only.
    Trigger,
}
