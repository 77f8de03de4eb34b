//! Orb placement geometry.
//!
//! The floating avatar element stays mounted across every widget state; only
//! its transform changes. Targets are derived from the measured rectangles of
//! the idle button anchor and the in-panel dock anchor. While a transition is
//! interpolating the tracker is frozen: resize-driven re-measures are dropped
//! so the orb does not chase a moving target mid-animation.

use crate::chat::state::WidgetState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbTarget {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Where the orb should sit for `state`. Fab and Closing aim at the idle
/// button; Opening and Open aim at the panel dock, scaled to its size.
pub fn orb_target(state: WidgetState, fab: AnchorRect, dock: AnchorRect) -> OrbTarget {
    let (anchor, scale) = match state {
        WidgetState::Fab | WidgetState::Closing => (fab, 1.0),
        WidgetState::Opening | WidgetState::Open => {
            let scale = if fab.width > 0.0 {
                dock.width / fab.width
            } else {
                1.0
            };
            (dock, scale)
        }
    };
    let (x, y) = anchor.center();
    OrbTarget { x, y, scale }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorTracker {
    fab: Option<AnchorRect>,
    dock: Option<AnchorRect>,
    frozen: bool,
}

impl AnchorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fab(&mut self, rect: AnchorRect) {
        if !self.frozen {
            self.fab = Some(rect);
        }
    }

    pub fn set_dock(&mut self, rect: AnchorRect) {
        if !self.frozen {
            self.dock = Some(rect);
        }
    }

    /// Suppress re-measures for the duration of a transition animation.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn release(&mut self) {
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Target for the current widget state, once both anchors have been
    /// measured.
    pub fn target(&self, state: WidgetState) -> Option<OrbTarget> {
        Some(orb_target(state, self.fab?, self.dock?))
    }
}
