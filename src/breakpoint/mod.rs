//! Breakpoint controller.
//!
//! Exactly one brick is breakpoint-aware: the fixed wrapping layout. Its
//! controller evaluates `viewport_width() <= threshold_px` at construction
//! and subscribes to further viewport changes, feeding a flex direction
//! into style composition. A crossing toggles the direction at most once;
//! a width change on the same side of the threshold is not a toggle.
//!
//! The subscription is a scoped resource: exclusively owned by its
//! controller, released exactly once by [`BreakpointController::dispose`]
//! (idempotent, also bound to `Drop`), with no callback firing afterward.
//!
//! # Example
//!
//! ```rust
//! use brickwork::breakpoint::BreakpointController;
//! use brickwork::types::FlexDirection;
//! use brickwork::viewport::{reset_viewport_state, set_viewport_width};
//!
//! reset_viewport_state();
//! set_viewport_width(1200);
//!
//! let mut controller = BreakpointController::new(1300);
//! assert_eq!(controller.direction(), FlexDirection::Column);
//!
//! set_viewport_width(1400);
//! assert_eq!(controller.direction(), FlexDirection::Row);
//!
//! controller.dispose();
//! reset_viewport_state();
//! ```

use spark_signals::{effect, signal, Signal};

use crate::types::FlexDirection;
use crate::viewport::{viewport_width, viewport_width_signal};

// =============================================================================
// BreakpointState
// =============================================================================

/// Snapshot of one controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointState {
    /// The viewport-width threshold in pixels.
    pub threshold_px: u32,
    /// Whether the viewport is currently at or below the threshold.
    pub currently_below: bool,
}

// =============================================================================
// BreakpointController
// =============================================================================

/// Watches the viewport width against one fixed threshold.
///
/// The `below` signal flips only when the predicate's truth value changes,
/// relative to this controller's own last observation - a resize that stays
/// on the same side of the threshold notifies nobody.
pub struct BreakpointController {
    threshold_px: u32,
    below: Signal<bool>,
    stop: Option<Box<dyn FnOnce()>>,
}

impl BreakpointController {
    /// Construct a controller and subscribe to viewport changes.
    ///
    /// The predicate is evaluated immediately against the current width;
    /// that value feeds the first style composition.
    pub fn new(threshold_px: u32) -> Self {
        let initial = viewport_width() <= threshold_px;
        let below = signal(initial);

        let width = viewport_width_signal();
        let below_out = below.clone();
        let mut last = initial;
        let stop = effect(move || {
            let is_below = width.get() <= threshold_px;
            if is_below != last {
                last = is_below;
                below_out.set(is_below);
            }
        });

        Self {
            threshold_px,
            below,
            stop: Some(Box::new(stop)),
        }
    }

    /// Whether the viewport is at or below the threshold.
    pub fn is_below(&self) -> bool {
        self.below.get()
    }

    /// The direction this controller currently selects: column at or below
    /// the threshold, row otherwise.
    pub fn direction(&self) -> FlexDirection {
        if self.below.get() {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        }
    }

    /// The `below` signal, for reactive consumers.
    pub fn below_signal(&self) -> Signal<bool> {
        self.below.clone()
    }

    /// Current state snapshot.
    pub fn state(&self) -> BreakpointState {
        BreakpointState {
            threshold_px: self.threshold_px,
            currently_below: self.below.get(),
        }
    }

    /// Release the viewport subscription.
    ///
    /// Effective immediately and idempotent; after this, no viewport
    /// change reaches the controller.
    pub fn dispose(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for BreakpointController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for BreakpointController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreakpointController")
            .field("threshold_px", &self.threshold_px)
            .field("currently_below", &self.below.get())
            .field("disposed", &self.stop.is_none())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
