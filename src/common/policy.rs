//! Dash/banana rule variants.
//!
//! The game shipped several controller flavours that only differ in how the
//! dash is paid for and re-armed. They are all expressed here as data so a
//! single controller can run any of them.

use bevy::prelude::*;

/// How the dash is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashResourceMode {
    /// Dashing is free.
    None,
    /// Each dash spends a banana; with none left the dash input is ignored.
    #[default]
    Consuming,
    /// Each dash spends a banana; dashing with none left reloads the level.
    ConsumingWithReload,
}

impl DashResourceMode {
    #[inline]
    pub fn spends_bananas(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How the dash becomes available again after it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashCooldownMode {
    /// Ready again on the frame the dash ends.
    #[default]
    Immediate,
    /// A `can_dash` flag is cleared for the dash and re-armed after
    /// `DashPolicy::cooldown`. While it is cleared the manual reset is
    /// ignored as well.
    Flagged,
}

/// Whether the banana count survives a level (re)load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BananaPersistence {
    #[default]
    ResetOnLoad,
    Persist,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DashPolicy {
    pub resource_mode: DashResourceMode,
    pub cooldown_mode: DashCooldownMode,
    /// Seconds before the flag is re-armed in `Flagged` mode. Zero re-arms
    /// on the same frame the dash ends.
    pub cooldown: f32,
    /// Pickups also raise the cap.
    pub cap_growth: bool,
    pub persistence: BananaPersistence,
}
