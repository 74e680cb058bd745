//! Shared per-character movement state.
//!
//! Every sub-controller reads and writes the same `MovementState`. The body
//! velocity itself lives on avian's `LinearVelocity`; who may write it in a
//! given tick is decided by [`MovementState::velocity_owner`] and nothing else.

use bevy::prelude::*;

use super::delay::DelayedAction;

/// The one sub-controller allowed to write the body velocity this tick.
///
/// Precedence: a dash outranks a wall jump, which outranks the run driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityOwner {
    #[default]
    Driver,
    WallJump,
    Dash,
}

/// Ground/wall probe result, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub grounded: bool,
    pub walled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallJumpPhase {
    Idle,
    GraceWindow,
    JumpActive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallJumpState {
    /// The jump-away impulse owns the velocity.
    pub active: bool,
    /// Seconds left in the grace window. Decays below zero freely.
    pub counter: f32,
    /// +1 pushes right, -1 pushes left.
    pub direction: f32,
    pub expire: DelayedAction,
}

impl WallJumpState {
    pub fn phase(&self) -> WallJumpPhase {
        if self.active {
            WallJumpPhase::JumpActive
        } else if self.counter > 0.0 {
            WallJumpPhase::GraceWindow
        } else {
            WallJumpPhase::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing {
        ends_at: f64,
    },
    /// Only reached with `DashCooldownMode::Flagged` and a positive cooldown.
    Cooldown {
        until: f64,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    pub phase: DashPhase,
    pub direction: Vec2,
    /// Gravity scale to restore when the dash ends.
    pub original_gravity: f32,
}

impl DashState {
    #[inline]
    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    /// The `can_dash` flag.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, DashPhase::Ready)
    }
}

#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub horizontal_input: f32,
    pub facing_right: bool,
    pub contacts: Contacts,
    pub is_wall_sliding: bool,
    pub wall_jump: WallJumpState,
    pub dash: DashState,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            horizontal_input: 0.0,
            facing_right: true,
            contacts: Contacts::default(),
            is_wall_sliding: false,
            wall_jump: WallJumpState::default(),
            dash: DashState::default(),
        }
    }
}

impl MovementState {
    pub fn velocity_owner(&self) -> VelocityOwner {
        if self.dash.is_dashing() {
            VelocityOwner::Dash
        } else if self.wall_jump.active {
            VelocityOwner::WallJump
        } else {
            VelocityOwner::Driver
        }
    }
}
